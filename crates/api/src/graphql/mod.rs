//! GraphQL API for vehicles and their parts.
//!
//! # Example Queries
//!
//! ```graphql
//! # Every vehicle with its parts and a joke
//! query {
//!   vehicles { id name manufacturer year joke parts { id name price } }
//! }
//!
//! # Vehicles built between two years, bounds included
//! query {
//!   vehiclesByYearRange(startYear: 1960, endYear: 1970) { id name year }
//! }
//!
//! # Add a part to a vehicle
//! mutation {
//!   addPart(name: "Carburetor", price: 120.5, vehicleId: "65a1f0c2e4b0a1b2c3d4e5f6") { id }
//! }
//! ```

pub mod enrich;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use garage_db::DataContext;

use self::enrich::JokeEnricher;
use self::mutation::MutationRoot;
use self::query::QueryRoot;

/// The full GraphQL schema type. There is no subscription root.
pub type GarageSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the shared request context.
///
/// The schema is injected with:
/// - [`DataContext`] for the `vehicles` and `parts` collections
/// - [`JokeEnricher`] for joke lookups
pub fn build_schema(data: DataContext, jokes: JokeEnricher) -> GarageSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data)
        .data(jokes)
        .finish()
}
