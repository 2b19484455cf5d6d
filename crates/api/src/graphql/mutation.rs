//! GraphQL mutation resolvers.
//!
//! Vehicles can be added and updated; parts can be added and deleted.
//! There is no vehicle deletion and no part update.

use async_graphql::{Context, Object, Result, ID};
use garage_core::types::parse_id;
use garage_db::models::part::CreatePart;
use garage_db::models::vehicle::{CreateVehicle, UpdateVehicle};
use garage_db::DataContext;

use crate::error::GraphQLResultExt;
use crate::graphql::types::{Part, Vehicle};

/// GraphQL Mutation root
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a vehicle. The result has no parts and no joke.
    async fn add_vehicle(
        &self,
        ctx: &Context<'_>,
        name: String,
        manufacturer: String,
        year: i32,
    ) -> Result<Vehicle> {
        let data = ctx.data::<DataContext>()?;
        let input = CreateVehicle {
            name,
            manufacturer,
            year,
        };

        let vehicle = data.vehicles.create(&input).await.map_gql_err()?;
        tracing::info!(id = %vehicle.id, name = %vehicle.name, "Vehicle added");
        Ok(vehicle.into())
    }

    /// Add a part. The referenced vehicle does not have to exist.
    async fn add_part(
        &self,
        ctx: &Context<'_>,
        name: String,
        price: f64,
        vehicle_id: ID,
    ) -> Result<Part> {
        let data = ctx.data::<DataContext>()?;
        let input = CreatePart {
            name,
            price,
            vehicle_id: parse_id(&vehicle_id).map_gql_err()?,
        };

        let part = data.parts.create(&input).await.map_gql_err()?;
        tracing::info!(id = %part.id, vehicle_id = %part.vehicle_id, "Part added");
        Ok(part.into())
    }

    /// Replace a vehicle's name, manufacturer and year. Null if no vehicle
    /// has the given id; nothing is created in that case.
    async fn update_vehicle(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        manufacturer: String,
        year: i32,
    ) -> Result<Option<Vehicle>> {
        let data = ctx.data::<DataContext>()?;
        let id = parse_id(&id).map_gql_err()?;
        let input = UpdateVehicle {
            name,
            manufacturer,
            year,
        };

        let updated = data.vehicles.update(id, &input).await.map_gql_err()?;
        if updated.is_none() {
            tracing::debug!(%id, "Vehicle to update not found");
        }
        Ok(updated.map(Vehicle::from))
    }

    /// Delete a part, returning it as it was stored. Null if no part has
    /// the given id.
    async fn delete_part(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Part>> {
        let data = ctx.data::<DataContext>()?;
        let id = parse_id(&id).map_gql_err()?;

        let deleted = data.parts.delete(id).await.map_gql_err()?;
        if deleted.is_some() {
            tracing::info!(%id, "Part deleted");
        }
        Ok(deleted.map(Part::from))
    }
}
