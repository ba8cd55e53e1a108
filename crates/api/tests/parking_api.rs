//! HTTP-level integration tests for parking lot registration and lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_parking_starts_fully_available(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/parkings",
        serde_json::json!({"number": "AB-12", "address": "1 Main St", "count_places": 20}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["number"], "AB-12");
    assert_eq!(json["opened"], true);
    assert_eq!(json["count_places"], 20);
    assert_eq!(json["count_available_places"], 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_parking_without_number(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/parkings",
        serde_json::json!({
            "address": "Test Address",
            "opened": true,
            "count_places": 10,
            "count_available_places": 5
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["number"].is_null());
    assert_eq!(json["count_available_places"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_address_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/parkings",
        serde_json::json!({"count_places": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("address"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_places_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/parkings",
        serde_json::json!({"address": "Nowhere", "count_places": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "count_places: must be at least 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_available_above_total_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/parkings",
        serde_json::json!({"address": "Overbooked", "count_places": 3, "count_available_places": 4}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_and_list_parkings(pool: PgPool) {
    let id = common::create_parking(
        &pool,
        serde_json::json!({"address": "A", "count_places": 2}),
    )
    .await;
    common::create_parking(&pool, serde_json::json!({"address": "B", "count_places": 3})).await;

    let response = get(common::build_test_app(pool.clone()), &format!("/parkings/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["address"], "A");

    let response = get(common::build_test_app(pool), "/parkings").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_parking_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/parkings/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_parking_id_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/parkings/first").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
