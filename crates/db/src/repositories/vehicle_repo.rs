//! Store for the `vehicles` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use garage_core::types::DbId;
use garage_core::year_range::YearRange;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use crate::DbResult;

/// Read and write access to vehicle documents.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// All vehicles in natural store order.
    async fn list(&self) -> DbResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Vehicle>>;

    /// Vehicles whose manufacturer equals `manufacturer` exactly.
    async fn list_by_manufacturer(&self, manufacturer: &str) -> DbResult<Vec<Vehicle>>;

    /// Vehicles whose year lies inside `range`, bounds included.
    async fn list_by_year_range(&self, range: YearRange) -> DbResult<Vec<Vehicle>>;

    /// Insert a new vehicle, returning the stored document.
    async fn create(&self, input: &CreateVehicle) -> DbResult<Vehicle>;

    /// Replace name, manufacturer and year on the vehicle with `id`.
    ///
    /// Returns `None` if no vehicle with the given `id` exists. Never inserts.
    async fn update(&self, id: DbId, input: &UpdateVehicle) -> DbResult<Option<Vehicle>>;

    /// Cheap round-trip proving the backing collection is reachable.
    async fn ping(&self) -> DbResult<()>;
}

pub(crate) fn id_filter(id: DbId) -> Document {
    doc! { "_id": id }
}

pub(crate) fn manufacturer_filter(manufacturer: &str) -> Document {
    doc! { "manufacturer": manufacturer }
}

pub(crate) fn year_range_filter(range: YearRange) -> Document {
    doc! { "year": { "$gte": range.start, "$lte": range.end } }
}

pub(crate) fn update_document(input: &UpdateVehicle) -> Document {
    doc! {
        "$set": {
            "name": input.name.as_str(),
            "manufacturer": input.manufacturer.as_str(),
            "year": input.year,
        }
    }
}

#[async_trait]
impl VehicleStore for Collection<Vehicle> {
    async fn list(&self) -> DbResult<Vec<Vehicle>> {
        self.find(doc! {}).await?.try_collect().await
    }

    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Vehicle>> {
        self.find_one(id_filter(id)).await
    }

    async fn list_by_manufacturer(&self, manufacturer: &str) -> DbResult<Vec<Vehicle>> {
        self.find(manufacturer_filter(manufacturer))
            .await?
            .try_collect()
            .await
    }

    async fn list_by_year_range(&self, range: YearRange) -> DbResult<Vec<Vehicle>> {
        self.find(year_range_filter(range)).await?.try_collect().await
    }

    async fn create(&self, input: &CreateVehicle) -> DbResult<Vehicle> {
        let vehicle = Vehicle::new(DbId::new(), input);
        self.insert_one(&vehicle).await?;
        tracing::debug!(id = %vehicle.id, "Vehicle inserted");
        Ok(vehicle)
    }

    async fn update(&self, id: DbId, input: &UpdateVehicle) -> DbResult<Option<Vehicle>> {
        self.find_one_and_update(id_filter(id), update_document(input))
            .return_document(ReturnDocument::After)
            .await
    }

    async fn ping(&self) -> DbResult<()> {
        self.estimated_document_count().await?;
        Ok(())
    }
}
