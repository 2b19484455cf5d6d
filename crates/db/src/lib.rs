//! Document-store access for the `vehicles` and `parts` collections.
//!
//! Storage is reached through the [`VehicleStore`] and [`PartStore`] traits.
//! Both are implemented directly on the MongoDB collection handles, so the
//! handles opened at startup are the data access context itself.

pub mod context;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};

pub use context::DataContext;
pub use repositories::{PartStore, VehicleStore};

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "classic_cars";

/// Collection holding vehicle documents.
pub const VEHICLES_COLLECTION: &str = "vehicles";

/// Collection holding part documents.
pub const PARTS_COLLECTION: &str = "parts";

/// Result type for every store operation.
pub type DbResult<T> = Result<T, mongodb::error::Error>;

/// Create a client from a connection string and select `database`.
///
/// The driver connects lazily; call [`health_check`] to verify the server
/// is reachable.
pub async fn connect(url: &str, database: &str) -> DbResult<Database> {
    let client = Client::with_uri_str(url).await?;
    tracing::debug!(database, "MongoDB client created");
    Ok(client.database(database))
}

/// Round-trip a `ping` command to the server.
pub async fn health_check(db: &Database) -> DbResult<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
