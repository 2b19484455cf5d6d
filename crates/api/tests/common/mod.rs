#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_graphql::{Request, Variables};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request as HttpRequest};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use garage_api::config::{JokeConfig, ServerConfig};
use garage_api::graphql::enrich::JokeEnricher;
use garage_api::graphql::{build_schema, GarageSchema};
use garage_api::router::build_app_router;
use garage_api::state::AppState;
use garage_core::types::DbId;
use garage_core::year_range::YearRange;
use garage_db::models::part::{CreatePart, Part};
use garage_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use garage_db::{DataContext, DbResult, PartStore, VehicleStore};
use garage_jokes::{JokeApiError, JokeSource};

pub const FIXED_JOKE: &str =
    "Why did the mechanic sleep under the car? - He wanted to wake up oily.";

/// Build a test `JokeConfig`: short timeout, small fan-out, and lenient
/// rather than the default strict policy.
pub fn test_joke_config() -> JokeConfig {
    JokeConfig {
        url: "http://127.0.0.1:9/unused".to_string(),
        timeout: Duration::from_millis(200),
        concurrency: 4,
        strict: false,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        mongo_url: "mongodb://127.0.0.1:27017".to_string(),
        mongo_db: "classic_cars_test".to_string(),
        jokes: test_joke_config(),
    }
}

pub fn enricher(source: impl JokeSource + 'static, config: &JokeConfig) -> JokeEnricher {
    JokeEnricher::new(Arc::new(source), config)
}

/// Schema over `data` that always answers with [`FIXED_JOKE`].
pub fn build_test_schema(data: DataContext) -> GarageSchema {
    build_schema(data, enricher(FixedJoke, &test_joke_config()))
}

/// Build the full application router with all middleware layers over an
/// empty in-memory store.
pub fn build_test_app() -> Router {
    let data = DataContext::in_memory();
    let config = test_config();
    let state = AppState {
        schema: build_test_schema(data.clone()),
        data,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Schema helpers
// ---------------------------------------------------------------------------

/// Execute `query` and return the full response as JSON (`data` and `errors`).
pub async fn execute_raw(schema: &GarageSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

/// Execute `query`, assert it produced no errors, and return `data`.
pub async fn execute(schema: &GarageSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "Errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

/// Add a vehicle through the API and return its id.
pub async fn add_vehicle(
    schema: &GarageSchema,
    name: &str,
    manufacturer: &str,
    year: i32,
) -> String {
    let data = execute(
        schema,
        "mutation($name: String!, $manufacturer: String!, $year: Int!) {
            addVehicle(name: $name, manufacturer: $manufacturer, year: $year) { id }
        }",
        serde_json::json!({ "name": name, "manufacturer": manufacturer, "year": year }),
    )
    .await;
    data["addVehicle"]["id"].as_str().unwrap().to_string()
}

/// Add a part through the API and return its id.
pub async fn add_part(
    schema: &GarageSchema,
    name: &str,
    price: f64,
    vehicle_id: &str,
) -> String {
    let data = execute(
        schema,
        "mutation($name: String!, $price: Float!, $vehicleId: ID!) {
            addPart(name: $name, price: $price, vehicleId: $vehicleId) { id }
        }",
        serde_json::json!({ "name": name, "price": price, "vehicleId": vehicle_id }),
    )
    .await;
    data["addPart"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = HttpRequest::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = HttpRequest::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Joke sources
// ---------------------------------------------------------------------------

/// Always answers with [`FIXED_JOKE`].
pub struct FixedJoke;

#[async_trait]
impl JokeSource for FixedJoke {
    async fn random_joke(&self) -> Result<String, JokeApiError> {
        Ok(FIXED_JOKE.to_string())
    }
}

/// Always fails as if the endpoint returned 503.
pub struct FailingJoke;

#[async_trait]
impl JokeSource for FailingJoke {
    async fn random_joke(&self) -> Result<String, JokeApiError> {
        Err(JokeApiError::ApiError {
            status: 503,
            body: "upstream down".to_string(),
        })
    }
}

/// Answers only after the given delay.
pub struct SlowJoke(pub Duration);

#[async_trait]
impl JokeSource for SlowJoke {
    async fn random_joke(&self) -> Result<String, JokeApiError> {
        tokio::time::sleep(self.0).await;
        Ok(FIXED_JOKE.to_string())
    }
}

/// Records total calls and the peak number of calls in flight. Clones
/// share their counters.
#[derive(Clone, Default)]
pub struct CountingJoke {
    counters: Arc<Counters>,
}

#[derive(Default)]
struct Counters {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingJoke {
    pub fn peak(&self) -> usize {
        self.counters.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.counters.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeSource for CountingJoke {
    async fn random_joke(&self) -> Result<String, JokeApiError> {
        let counters = &self.counters;
        counters.calls.fetch_add(1, Ordering::SeqCst);
        let now = counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        counters.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        counters.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(FIXED_JOKE.to_string())
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// A store whose every call fails as if the server were unreachable.
pub struct DownStore;

impl DownStore {
    pub fn context() -> DataContext {
        DataContext::new(Arc::new(DownStore), Arc::new(DownStore))
    }
}

fn down<T>() -> DbResult<T> {
    Err(std::io::Error::other("down").into())
}

#[async_trait]
impl VehicleStore for DownStore {
    async fn list(&self) -> DbResult<Vec<Vehicle>> {
        down()
    }

    async fn find_by_id(&self, _id: DbId) -> DbResult<Option<Vehicle>> {
        down()
    }

    async fn list_by_manufacturer(&self, _manufacturer: &str) -> DbResult<Vec<Vehicle>> {
        down()
    }

    async fn list_by_year_range(&self, _range: YearRange) -> DbResult<Vec<Vehicle>> {
        down()
    }

    async fn create(&self, _input: &CreateVehicle) -> DbResult<Vehicle> {
        down()
    }

    async fn update(&self, _id: DbId, _input: &UpdateVehicle) -> DbResult<Option<Vehicle>> {
        down()
    }

    async fn ping(&self) -> DbResult<()> {
        down()
    }
}

#[async_trait]
impl PartStore for DownStore {
    async fn list(&self) -> DbResult<Vec<Part>> {
        down()
    }

    async fn list_by_vehicle(&self, _vehicle_id: DbId) -> DbResult<Vec<Part>> {
        down()
    }

    async fn create(&self, _input: &CreatePart) -> DbResult<Part> {
        down()
    }

    async fn delete(&self, _id: DbId) -> DbResult<Option<Part>> {
        down()
    }

    async fn ping(&self) -> DbResult<()> {
        down()
    }
}
