use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param, body_partial_json};

use shared_utils::jwt::validate_token;
use shared_utils::test_utils::{MockSupabaseResponses, TestConfig, TestUser};
use user_cell::router::user_routes;

const PATIENT: &str = "patient@example.com";
const ADMIN: &str = "admin@example.com";

fn create_test_app(server: &MockServer) -> (Router, TestConfig) {
    let config = TestConfig::with_mock_server(&server.uri());
    (user_routes(config.to_arc()), config)
}

async fn mount_user(server: &MockServer, email: &str, role: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", format!("eq.{}", email)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::user_response(email, role)
        ])))
        .mount(server)
        .await;
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_admin_flag_flips_after_promotion() {
    let server = MockServer::start().await;
    let (app, config) = create_test_app(&server);

    mount_user(&server, PATIENT, None).await;
    mount_user(&server, ADMIN, Some("admin")).await;

    let (status, body) = send(&app, get(&format!("/admin/{}", PATIENT))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": false }));

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", format!("eq.{}", PATIENT)))
        .and(body_partial_json(json!({ "role": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::user_response(PATIENT, Some("admin"))
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let promote = Request::builder()
        .method("PUT")
        .uri(format!("/user/admin/{}", PATIENT))
        .header("authorization", TestUser::admin(ADMIN).bearer(&config.jwt_secret))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, promote).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    // The store now holds the promoted role.
    server.reset().await;
    mount_user(&server, PATIENT, Some("admin")).await;

    let (status, body) = send(&app, get(&format!("/admin/{}", PATIENT))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "admin": true }));
}

#[tokio::test]
async fn test_unknown_user_is_not_admin() {
    let server = MockServer::start().await;
    let (app, _) = create_test_app(&server);

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (status, body) = send(&app, get("/admin/nobody@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], false);
}

#[tokio::test]
async fn test_non_admin_cannot_promote() {
    let server = MockServer::start().await;
    let (app, config) = create_test_app(&server);

    mount_user(&server, PATIENT, None).await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("PUT")
        .uri("/user/admin/someone@example.com")
        .header("authorization", TestUser::patient(PATIENT).bearer(&config.jwt_secret))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden access");
}

#[tokio::test]
async fn test_promoting_missing_user_is_404() {
    let server = MockServer::start().await;
    let (app, config) = create_test_app(&server);

    mount_user(&server, ADMIN, Some("admin")).await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("PUT")
        .uri("/user/admin/ghost@example.com")
        .header("authorization", TestUser::admin(ADMIN).bearer(&config.jwt_secret))
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upsert_returns_usable_token_and_ignores_role() {
    let server = MockServer::start().await;
    let (app, config) = create_test_app(&server);

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(query_param("on_conflict", "email"))
        .and(body_partial_json(json!({ "email": PATIENT, "name": "Pat" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockSupabaseResponses::user_response(PATIENT, None)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/user/{}", PATIENT))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "Pat", "role": "admin" }).to_string()))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], PATIENT);

    let token = body["token"].as_str().unwrap();
    let user = validate_token(token, &config.jwt_secret).unwrap();
    assert_eq!(user.email.as_deref(), Some(PATIENT));

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("role").is_none());
}

#[tokio::test]
async fn test_upsert_rejects_malformed_email() {
    let server = MockServer::start().await;
    let (app, _) = create_test_app(&server);

    let request = Request::builder()
        .method("PUT")
        .uri("/user/not-an-email")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let server = MockServer::start().await;
    let (app, config) = create_test_app(&server);

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::user_response(PATIENT, None),
            MockSupabaseResponses::user_response(ADMIN, Some("admin")),
        ])))
        .mount(&server)
        .await;

    let (status, _) = send(&app, get("/users")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/users")
        .header("authorization", TestUser::patient(PATIENT).bearer(&config.jwt_secret))
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_remove_user_reports_count() {
    let server = MockServer::start().await;
    let (app, _) = create_test_app(&server);

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", "eq.abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "abc" }])))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/user-remove/abc")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 1);
}
