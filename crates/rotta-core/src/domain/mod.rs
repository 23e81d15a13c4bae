//! Domain entities - the core business objects.

mod agency;
mod check_in;
mod pillar;
mod platform;
mod post;

pub use agency::Agency;
pub use check_in::{CheckIn, week_start};
pub use pillar::{AgencyPillars, PILLAR_MAX_CHARS, Pillar};
pub use platform::{Platform, UnknownPlatform};
pub use post::{Post, PostStatus, Slot};
