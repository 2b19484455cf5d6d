//! Store layer.
//!
//! Each store is a trait with async methods for one collection. The MongoDB
//! implementations live on `mongodb::Collection<T>` itself; the in-memory
//! implementation used by tests lives in [`crate::memory`].

pub mod part_repo;
pub mod vehicle_repo;

pub use part_repo::PartStore;
pub use vehicle_repo::VehicleStore;
