//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["occupancy_lock_timeout_ms"], 500);
    assert_eq!(json["capacity"]["parkings"], 0);
    assert_eq!(json["capacity"]["total_places"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_lot_capacity(pool: PgPool) {
    common::create_parking(
        &pool,
        serde_json::json!({"address": "1 Main St", "count_places": 10, "count_available_places": 5}),
    )
    .await;
    common::create_parking(
        &pool,
        serde_json::json!({"address": "2 Side St", "opened": false, "count_places": 3}),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool), "/health").await).await;

    let capacity = &json["capacity"];
    assert_eq!(capacity["parkings"], 2);
    assert_eq!(capacity["open_parkings"], 1);
    assert_eq!(capacity["total_places"], 13);
    assert_eq!(capacity["available_places"], 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/client_parkings")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5173"
    );
}
