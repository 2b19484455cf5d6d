//! Stored document shapes and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` document struct matching the stored shape,
//!   always carrying its `_id`
//! - A create DTO for inserts (no identifier yet)

pub mod part;
pub mod vehicle;
