//! Part document model and DTOs.

use garage_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A document from the `parts` collection.
///
/// `vehicle_id` references a vehicle by id; nothing checks that the
/// vehicle exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub price: f64,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: DbId,
}

/// DTO for inserting a new part.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePart {
    pub name: String,
    pub price: f64,
    pub vehicle_id: DbId,
}

impl Part {
    /// Build the document stored for `input` under a freshly assigned id.
    pub fn new(id: DbId, input: &CreatePart) -> Self {
        Self {
            id,
            name: input.name.clone(),
            price: input.price,
            vehicle_id: input.vehicle_id,
        }
    }
}
