//! Document-store failures surface as sanitized GraphQL errors.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_test_schema, execute_raw, get, test_config, DownStore, FixedJoke};
use garage_api::graphql::build_schema;
use garage_api::router::build_app_router;
use garage_api::state::AppState;
use serde_json::{json, Value};

fn assert_internal_error(response: &Value) {
    assert_eq!(response["data"], Value::Null);
    let error = &response["errors"][0];
    assert_eq!(error["message"], "An internal error occurred");
    assert_eq!(error["extensions"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn listing_vehicles_fails_with_internal_error() {
    let schema = build_test_schema(DownStore::context());

    let response = execute_raw(&schema, "{ vehicles { id name } }", json!({})).await;

    assert_internal_error(&response);
}

#[tokio::test]
async fn adding_a_vehicle_fails_with_internal_error() {
    let schema = build_test_schema(DownStore::context());

    let response = execute_raw(
        &schema,
        r#"mutation { addVehicle(name: "Mustang", manufacturer: "Ford", year: 1967) { id } }"#,
        json!({}),
    )
    .await;

    assert_internal_error(&response);
}

#[tokio::test]
async fn deleting_a_part_fails_with_internal_error() {
    let schema = build_test_schema(DownStore::context());

    let response = execute_raw(
        &schema,
        r#"mutation { deletePart(id: "65a1f0c2e4b0a1b2c3d4e5f6") { id } }"#,
        json!({}),
    )
    .await;

    // `deletePart` is nullable, so only the field is nulled.
    assert_eq!(response["data"]["deletePart"], Value::Null);
    let error = &response["errors"][0];
    assert_eq!(error["message"], "An internal error occurred");
    assert_eq!(error["extensions"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn driver_details_never_reach_the_caller() {
    let schema = build_test_schema(DownStore::context());

    let response = execute_raw(&schema, "{ parts { id } }", json!({})).await;

    assert_internal_error(&response);
    assert!(!response.to_string().contains("down"));
}

#[tokio::test]
async fn health_reports_degraded_when_store_is_down() {
    let data = DownStore::context();
    let config = test_config();
    let state = AppState {
        schema: build_schema(data.clone(), common::enricher(FixedJoke, &config.jokes)),
        data,
        config: Arc::new(config.clone()),
    };

    let response = get(build_app_router(state, &config), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
