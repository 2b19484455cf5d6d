//! Vehicle document model and DTOs.

use garage_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A document from the `vehicles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub manufacturer: String,
    pub year: i32,
}

/// DTO for inserting a new vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicle {
    pub name: String,
    pub manufacturer: String,
    pub year: i32,
}

/// DTO for replacing a vehicle's fields. Every field is required; there
/// is no partial update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVehicle {
    pub name: String,
    pub manufacturer: String,
    pub year: i32,
}

impl Vehicle {
    /// Build the document stored for `input` under a freshly assigned id.
    pub fn new(id: DbId, input: &CreateVehicle) -> Self {
        Self {
            id,
            name: input.name.clone(),
            manufacturer: input.manufacturer.clone(),
            year: input.year,
        }
    }

    /// Overwrite every mutable field with the values from `input`.
    pub fn apply(&mut self, input: &UpdateVehicle) {
        self.name = input.name.clone();
        self.manufacturer = input.manufacturer.clone();
        self.year = input.year;
    }
}
