//! GraphQL query resolvers.

use async_graphql::{Context, Object, Result, ID};
use garage_core::types::parse_id;
use garage_core::year_range::YearRange;
use garage_db::DataContext;

use crate::error::GraphQLResultExt;
use crate::graphql::enrich::{self, JokeEnricher};
use crate::graphql::types::{Part, Vehicle};

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every vehicle, each with its parts and a fresh joke.
    async fn vehicles(&self, ctx: &Context<'_>) -> Result<Vec<Vehicle>> {
        let data = ctx.data::<DataContext>()?;
        let jokes = ctx.data::<JokeEnricher>()?;

        let documents = data.vehicles.list().await.map_gql_err()?;
        enrich::all_with_parts_and_jokes(data, jokes, documents)
            .await
            .map_gql_err()
    }

    /// A single vehicle with its parts and a fresh joke, or null.
    async fn vehicle(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Vehicle>> {
        let data = ctx.data::<DataContext>()?;
        let jokes = ctx.data::<JokeEnricher>()?;
        let id = parse_id(&id).map_gql_err()?;

        let Some(document) = data.vehicles.find_by_id(id).await.map_gql_err()? else {
            return Ok(None);
        };
        enrich::with_parts_and_joke(data, jokes, document)
            .await
            .map(Some)
            .map_gql_err()
    }

    /// Every part.
    async fn parts(&self, ctx: &Context<'_>) -> Result<Vec<Part>> {
        let data = ctx.data::<DataContext>()?;
        let parts = data.parts.list().await.map_gql_err()?;
        Ok(parts.into_iter().map(Part::from).collect())
    }

    /// Vehicles by exact manufacturer, each with a joke but no parts.
    async fn vehicles_by_manufacturer(
        &self,
        ctx: &Context<'_>,
        manufacturer: String,
    ) -> Result<Vec<Vehicle>> {
        let data = ctx.data::<DataContext>()?;
        let jokes = ctx.data::<JokeEnricher>()?;

        let documents = data
            .vehicles
            .list_by_manufacturer(&manufacturer)
            .await
            .map_gql_err()?;
        enrich::all_with_jokes(jokes, documents).await.map_gql_err()
    }

    /// Parts referencing the given vehicle.
    async fn parts_by_vehicle(&self, ctx: &Context<'_>, vehicle_id: ID) -> Result<Vec<Part>> {
        let data = ctx.data::<DataContext>()?;
        let vehicle_id = parse_id(&vehicle_id).map_gql_err()?;

        let parts = data
            .parts
            .list_by_vehicle(vehicle_id)
            .await
            .map_gql_err()?;
        Ok(parts.into_iter().map(Part::from).collect())
    }

    /// Vehicles whose year is between `startYear` and `endYear` inclusive,
    /// without parts or joke.
    async fn vehicles_by_year_range(
        &self,
        ctx: &Context<'_>,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Vehicle>> {
        let data = ctx.data::<DataContext>()?;

        let documents = data
            .vehicles
            .list_by_year_range(YearRange::new(start_year, end_year))
            .await
            .map_gql_err()?;
        Ok(documents.into_iter().map(Vehicle::from).collect())
    }
}
