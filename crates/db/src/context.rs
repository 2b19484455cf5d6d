//! The data access context shared by every request.

use std::sync::Arc;

use mongodb::Database;

use crate::models::part::Part;
use crate::models::vehicle::Vehicle;
use crate::repositories::{PartStore, VehicleStore};
use crate::{DbResult, PARTS_COLLECTION, VEHICLES_COLLECTION};

/// Handles to the two collections, built once at startup and held for the
/// lifetime of the process.
///
/// Cheaply cloneable; the handles themselves are inert references to the
/// driver's connection pool.
#[derive(Clone)]
pub struct DataContext {
    pub vehicles: Arc<dyn VehicleStore>,
    pub parts: Arc<dyn PartStore>,
}

impl DataContext {
    pub fn new(vehicles: Arc<dyn VehicleStore>, parts: Arc<dyn PartStore>) -> Self {
        Self { vehicles, parts }
    }

    /// Open the `vehicles` and `parts` collections of `db`.
    pub fn from_database(db: &Database) -> Self {
        Self {
            vehicles: Arc::new(db.collection::<Vehicle>(VEHICLES_COLLECTION)),
            parts: Arc::new(db.collection::<Part>(PARTS_COLLECTION)),
        }
    }

    /// A context backed by a fresh, empty in-memory store.
    #[cfg(any(test, feature = "test-util"))]
    pub fn in_memory() -> Self {
        let store = Arc::new(crate::memory::MemoryStore::default());
        Self {
            vehicles: store.clone(),
            parts: store,
        }
    }

    /// Check that both collections are reachable.
    pub async fn health_check(&self) -> DbResult<()> {
        self.vehicles.ping().await?;
        self.parts.ping().await
    }
}
