//! Domain primitives shared by the storage and API crates.

pub mod error;
pub mod types;
pub mod year_range;
