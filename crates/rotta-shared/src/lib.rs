//! # Rotta Shared
//!
//! Wire types shared between the API server and its front end.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
