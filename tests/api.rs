use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use booking_pricing::{app_router, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_test_router() -> Router {
    let config = Config::default();
    app_router(AppState::new(&config), &config)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(build_test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn config_exposes_rates() {
    let (status, body) = get_json(build_test_router(), "/api/pricing/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_markup"], "0.10");
    assert_eq!(body["tax_rate"], "0.04");
    assert_eq!(body["pay_at_property_fee_rate"], "0.10");
}

#[tokio::test]
async fn display_and_original_price() {
    let app = build_test_router();

    let (status, body) = post_json(
        app.clone(),
        "/api/pricing/display-price",
        json!({ "base_price": 100 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_price"], "110");

    let (status, body) = post_json(
        app,
        "/api/pricing/original-price",
        json!({ "display_price": "110" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_price"], "100");
}

#[tokio::test]
async fn breakdown_without_pay_later_omits_fee() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/breakdown",
        json!({ "display_price_per_unit": 110, "quantity": 3, "is_pay_later": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtotal"], "330");
    assert_eq!(body["taxes"], "13");
    assert_eq!(body["total"], "343");
    assert_eq!(body["cleaning_fee"], "0");
    assert_eq!(body["service_fee"], "0");
    assert!(body.get("pay_at_property_fee").is_none());
}

#[tokio::test]
async fn breakdown_with_pay_at_tour() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/breakdown",
        json!({ "display_price_per_unit": 110, "quantity": 3, "is_pay_later": true, "is_tour": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pay_at_property_fee"], "34");
    assert_eq!(body["total"], "377");
}

#[tokio::test]
async fn booking_total_is_formatted() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/booking-total",
        json!({ "display_price_per_unit": 50, "quantity": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], "52");
    assert_eq!(body["formatted_total"], "$52");
}

#[tokio::test]
async fn format_endpoint() {
    let app = build_test_router();

    let (status, body) = post_json(app.clone(), "/api/pricing/format", json!({ "amount": 1234 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["formatted"], "$1,234");

    let (status, body) = post_json(
        app,
        "/api/pricing/format",
        json!({ "amount": 1234, "currency": "12" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "unsupported_currency");
}

#[tokio::test]
async fn property_quote_from_base_price() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/quotes/property",
        json!({
            "base_price": 100,
            "check_in": "2024-06-01",
            "check_out": "2024-06-04",
            "pay_at_property": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "property");
    assert_eq!(body["unit"], "night");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["display_price"], "110");
    assert_eq!(body["original_price"], "100");
    assert_eq!(body["check_in"], "2024-06-01");
    assert_eq!(body["breakdown"]["total"], "377");
    assert_eq!(body["pay_later_fee_label"], "Pay at property fee (10%)");
    assert_eq!(body["formatted_total"], "$377");
}

#[tokio::test]
async fn tour_quote_from_display_price() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/quotes/tour",
        json!({ "display_price": 116, "participants": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "tour");
    assert_eq!(body["unit"], "participant");
    assert_eq!(body["original_price"], "105");
    assert_eq!(body["breakdown"]["total"], "241");
    assert!(body.get("pay_later_fee_label").is_none());
    assert!(body.get("check_in").is_none());
}

#[tokio::test]
async fn validation_errors_return_bad_request() {
    let app = build_test_router();

    let (status, body) = post_json(
        app.clone(),
        "/api/pricing/display-price",
        json!({ "base_price": -10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "negative_amount");
    assert_eq!(body["details"]["field"], "base_price");

    let (status, body) = post_json(
        app.clone(),
        "/api/pricing/breakdown",
        json!({ "display_price_per_unit": 110, "quantity": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "negative_quantity");

    let (status, body) = post_json(
        app.clone(),
        "/api/pricing/quotes/tour",
        json!({ "base_price": 100, "display_price": 110, "participants": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "price_source");

    let (status, body) = post_json(
        app,
        "/api/pricing/quotes/property",
        json!({ "base_price": 100, "check_in": "2024-06-04", "check_out": "2024-06-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_stay");
}

#[tokio::test]
async fn malformed_body_returns_json_bad_request() {
    let app = build_test_router();

    let (status, body) = post_json(
        app.clone(),
        "/api/pricing/breakdown",
        json!({ "display_price_per_unit": 110, "quantity": 2.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
    assert!(body["message"].as_str().unwrap().contains("quantity"));

    let (status, body) = post_json(app.clone(), "/api/pricing/display-price", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/pricing/format")
                .body(Body::from(r#"{"amount": 1234}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error_type"], "invalid_request");
}

#[tokio::test]
async fn overflow_returns_internal_error() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/pricing/breakdown",
        json!({ "display_price_per_unit": "79228162514264337593543950335", "quantity": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_type"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = get_json(build_test_router(), "/api/pricing/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}
