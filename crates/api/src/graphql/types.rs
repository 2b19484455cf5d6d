//! GraphQL object types and their conversion from stored documents.

use async_graphql::{SimpleObject, ID};
use garage_db::models::part::Part as PartDocument;
use garage_db::models::vehicle::Vehicle as VehicleDocument;

/// A part belonging to a vehicle.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Part {
    pub id: ID,
    pub name: String,
    pub price: f64,
    /// Identifier of the vehicle this part references.
    pub vehicle_id: ID,
}

/// A vehicle, optionally enriched with its parts and a joke.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: ID,
    pub name: String,
    pub manufacturer: String,
    pub year: i32,
    /// Fetched fresh for each request; never stored.
    pub joke: Option<String>,
    /// Empty unless the query loads parts.
    pub parts: Option<Vec<Part>>,
}

impl Vehicle {
    /// Shape a stored vehicle for the API with the given enrichment.
    pub fn from_document(
        document: VehicleDocument,
        parts: Vec<Part>,
        joke: Option<String>,
    ) -> Self {
        Self {
            id: ID(document.id.to_hex()),
            name: document.name,
            manufacturer: document.manufacturer,
            year: document.year,
            joke,
            parts: Some(parts),
        }
    }
}

/// No parts, no joke.
impl From<VehicleDocument> for Vehicle {
    fn from(document: VehicleDocument) -> Self {
        Self::from_document(document, Vec::new(), None)
    }
}

impl From<PartDocument> for Part {
    fn from(document: PartDocument) -> Self {
        Self {
            id: ID(document.id.to_hex()),
            name: document.name,
            price: document.price,
            vehicle_id: ID(document.vehicle_id.to_hex()),
        }
    }
}
