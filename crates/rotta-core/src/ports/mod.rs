//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod generator;
mod repository;
mod share;

pub use clock::Clock;
pub use generator::{GenerationError, GenerationRequest, TextGenerator};
pub use repository::{AgencyRepository, BaseRepository, CheckInRepository, PostRepository};
pub use share::{ActionError, Clipboard, ShareLauncher};
