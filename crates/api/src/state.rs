use std::sync::Arc;

use garage_db::DataContext;

use crate::config::ServerConfig;
use crate::graphql::GarageSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema with the request context injected.
    pub schema: GarageSchema,
    /// Collection handles, also reachable here for the health check.
    pub data: DataContext,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
