//! SeaORM entities, one per table.

pub mod agency;
pub mod check_in;
pub mod post;
