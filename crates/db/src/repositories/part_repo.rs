//! Store for the `parts` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use garage_core::types::DbId;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::models::part::{CreatePart, Part};
use crate::repositories::vehicle_repo::id_filter;
use crate::DbResult;

/// Read and write access to part documents.
#[async_trait]
pub trait PartStore: Send + Sync {
    /// All parts in natural store order.
    async fn list(&self) -> DbResult<Vec<Part>>;

    /// Parts referencing the vehicle with `vehicle_id`.
    async fn list_by_vehicle(&self, vehicle_id: DbId) -> DbResult<Vec<Part>>;

    /// Insert a new part. The referenced vehicle is not checked.
    async fn create(&self, input: &CreatePart) -> DbResult<Part>;

    /// Atomically remove the part with `id`, returning it as it was stored.
    ///
    /// Returns `None` if no part with the given `id` exists.
    async fn delete(&self, id: DbId) -> DbResult<Option<Part>>;

    /// Cheap round-trip proving the backing collection is reachable.
    async fn ping(&self) -> DbResult<()>;
}

pub(crate) fn vehicle_filter(vehicle_id: DbId) -> Document {
    doc! { "vehicleId": vehicle_id }
}

#[async_trait]
impl PartStore for Collection<Part> {
    async fn list(&self) -> DbResult<Vec<Part>> {
        self.find(doc! {}).await?.try_collect().await
    }

    async fn list_by_vehicle(&self, vehicle_id: DbId) -> DbResult<Vec<Part>> {
        self.find(vehicle_filter(vehicle_id))
            .await?
            .try_collect()
            .await
    }

    async fn create(&self, input: &CreatePart) -> DbResult<Part> {
        let part = Part::new(DbId::new(), input);
        self.insert_one(&part).await?;
        tracing::debug!(id = %part.id, vehicle_id = %part.vehicle_id, "Part inserted");
        Ok(part)
    }

    async fn delete(&self, id: DbId) -> DbResult<Option<Part>> {
        self.find_one_and_delete(id_filter(id)).await
    }

    async fn ping(&self) -> DbResult<()> {
        self.estimated_document_count().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_filter_compares_object_ids() {
        let vehicle_id = DbId::new();
        assert_eq!(
            vehicle_filter(vehicle_id),
            doc! { "vehicleId": vehicle_id }
        );
    }
}
