use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param};

use catalog_cell::router::catalog_routes;
use shared_utils::test_utils::{MockSupabaseResponses, TestConfig};

const SLOTS: [&str; 3] = ["08.00 AM - 08.30 AM", "08.30 AM - 09.00 AM", "09.00 AM - 09.30 AM"];

fn create_test_app(server: &MockServer) -> Router {
    catalog_routes(TestConfig::with_mock_server(&server.uri()).to_arc())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn mount_services(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::service_response("Teeth Orthodontics", &SLOTS),
            MockSupabaseResponses::service_response("Cosmetic Dentistry", &SLOTS),
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_services_returns_full_slots() {
    let server = MockServer::start().await;
    mount_services(&server).await;

    let (status, body) = get_json(create_test_app(&server), "/services").await;

    assert_eq!(status, StatusCode::OK);
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["slots"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_available_subtracts_bookings_for_that_date_and_treatment() {
    let server = MockServer::start().await;
    mount_services(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/bookings"))
        .and(query_param("date", "eq.May 16, 2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::booking_response("Teeth Orthodontics", "May 16, 2022", SLOTS[0], "a@example.com"),
            MockSupabaseResponses::booking_response("Teeth Orthodontics", "May 16, 2022", SLOTS[2], "b@example.com"),
            MockSupabaseResponses::booking_response("Cosmetic Dentistry", "May 16, 2022", SLOTS[1], "c@example.com"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get_json(create_test_app(&server), "/available?date=May%2016,%202022").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Teeth Orthodontics");
    assert_eq!(body[0]["slots"], json!([SLOTS[1]]));
    assert_eq!(body[1]["name"], "Cosmetic Dentistry");
    assert_eq!(body[1]["slots"], json!([SLOTS[0], SLOTS[2]]));
}

#[tokio::test]
async fn test_available_with_no_bookings_keeps_every_slot() {
    let server = MockServer::start().await;
    mount_services(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (status, body) = get_json(create_test_app(&server), "/available?date=May%2017,%202022").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["slots"], json!(SLOTS));
    assert_eq!(body[1]["slots"], json!(SLOTS));
}

#[tokio::test]
async fn test_available_requires_date() {
    let server = MockServer::start().await;
    let (status, _) = get_json(create_test_app(&server), "/available").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let (status, body) = get_json(create_test_app(&server), "/services").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("503"));
}
