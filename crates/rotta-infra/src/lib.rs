//! # Rotta Infrastructure
//!
//! Concrete implementations of the ports defined in `rotta-core`.
//! This crate contains database, text generation, and clock integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `anthropic` - Copy generation via the Anthropic Messages API

pub mod clock;
pub mod database;
pub mod generation;
pub mod memory;

// Re-exports - always available
pub use clock::SystemClock;
pub use database::DatabaseConnections;
pub use generation::UnconfiguredGenerator;
pub use memory::InMemoryStore;

#[cfg(feature = "anthropic")]
pub use generation::{AnthropicConfig, AnthropicTextGenerator};
