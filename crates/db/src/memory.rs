//! In-memory store with the same observable behaviour as the MongoDB
//! collections, for tests that should not need a running server.

use async_trait::async_trait;
use garage_core::types::DbId;
use garage_core::year_range::YearRange;
use tokio::sync::RwLock;

use crate::models::part::{CreatePart, Part};
use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use crate::repositories::{PartStore, VehicleStore};
use crate::DbResult;

/// Both collections held as insertion-ordered vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vehicles: RwLock<Vec<Vehicle>>,
    parts: RwLock<Vec<Part>>,
}

#[async_trait]
impl VehicleStore for MemoryStore {
    async fn list(&self) -> DbResult<Vec<Vehicle>> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn list_by_manufacturer(&self, manufacturer: &str) -> DbResult<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles
            .iter()
            .filter(|v| v.manufacturer == manufacturer)
            .cloned()
            .collect())
    }

    async fn list_by_year_range(&self, range: YearRange) -> DbResult<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles
            .iter()
            .filter(|v| range.contains(v.year))
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreateVehicle) -> DbResult<Vehicle> {
        let vehicle = Vehicle::new(DbId::new(), input);
        self.vehicles.write().await.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, id: DbId, input: &UpdateVehicle) -> DbResult<Option<Vehicle>> {
        let mut vehicles = self.vehicles.write().await;
        Ok(vehicles.iter_mut().find(|v| v.id == id).map(|vehicle| {
            vehicle.apply(input);
            vehicle.clone()
        }))
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}

#[async_trait]
impl PartStore for MemoryStore {
    async fn list(&self) -> DbResult<Vec<Part>> {
        Ok(self.parts.read().await.clone())
    }

    async fn list_by_vehicle(&self, vehicle_id: DbId) -> DbResult<Vec<Part>> {
        let parts = self.parts.read().await;
        Ok(parts
            .iter()
            .filter(|p| p.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreatePart) -> DbResult<Part> {
        let part = Part::new(DbId::new(), input);
        self.parts.write().await.push(part.clone());
        Ok(part)
    }

    async fn delete(&self, id: DbId) -> DbResult<Option<Part>> {
        let mut parts = self.parts.write().await;
        Ok(parts
            .iter()
            .position(|p| p.id == id)
            .map(|index| parts.remove(index)))
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }
}
