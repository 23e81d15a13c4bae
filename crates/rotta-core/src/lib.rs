//! # Rotta Core
//!
//! The domain layer of Rotta: weekly check-ins become platform-tailored posts
//! slotted onto a calendar, one post per platform per day.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
