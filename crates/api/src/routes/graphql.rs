//! GraphQL HTTP endpoints.
//!
//! - `POST /graphql` - query and mutation endpoint
//! - `GET /graphql` - GraphiQL IDE

use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

/// Path the schema is served on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute a GraphQL query or mutation.
///
/// Resolver failures are reported inside the response body's `errors`
/// array, so this always answers 200 once the body parses.
async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// Serve the GraphiQL IDE.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
}
