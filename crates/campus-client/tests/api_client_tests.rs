//! End-to-end request pipeline tests against a wiremock backend

use campus_client::{ApiClient, ClientError, FailureHandler, RequestPipeline};
use campus_nav::{Route, Router, TenantResolver};
use campus_session::{
    ACCESS_TOKEN_KEY, AuthApi, CredentialStore, MemoryCredentialStore, REFRESH_TOKEN_KEY,
    SessionStore,
};

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

struct Harness {
    client: ApiClient,
    session: Arc<SessionStore>,
    router: Arc<Router>,
}

fn harness(server: &MockServer) -> Harness {
    let creds = MemoryCredentialStore::new();
    creds.put(ACCESS_TOKEN_KEY, "my-jwt-token");
    creds.put(REFRESH_TOKEN_KEY, "my-refresh-token");
    harness_with_creds(server, creds)
}

fn anonymous_harness(server: &MockServer) -> Harness {
    harness_with_creds(server, MemoryCredentialStore::new())
}

fn harness_with_creds(server: &MockServer, creds: MemoryCredentialStore) -> Harness {
    let session = Arc::new(SessionStore::new(
        Box::new(creds),
        AuthApi::new(&server.uri()),
    ));
    let router = Arc::new(Router::new());

    let pipeline = RequestPipeline::standard(
        "/api",
        &server.uri(),
        "X-School-Id",
        Arc::clone(&session),
        TenantResolver::new(Arc::clone(&router)),
    );
    let failures = FailureHandler::new(Arc::clone(&session), Arc::clone(&router));

    Harness {
        client: ApiClient::new(pipeline, failures),
        session,
        router,
    }
}

#[tokio::test]
async fn test_get_carries_bearer_token_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", "Bearer my-jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let h = harness(&server);
    let body = h.client.get("/api/users").await.unwrap();

    assert_eq!(body, json!({"items": []}));
}

#[tokio::test]
async fn test_tenant_header_present_only_on_school_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let h = harness(&server);

    h.router.replace(Route::parse("/schools/42/students"));
    h.client.get("/api/students").await.unwrap();

    h.router.replace(Route::schools());
    h.client.get("/api/students").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers.get("X-School-Id").map(|v| v.as_bytes()),
        Some("42".as_bytes())
    );
    assert!(!requests[1].headers.contains_key("X-School-Id"));
}

#[tokio::test]
async fn test_empty_success_body_yields_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/students/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let h = harness(&server);
    let body = h.client.delete("/api/students/9").await.unwrap();

    assert_eq!(body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_forbidden_navigates_to_forbidden_and_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fees"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "FORBIDDEN",
            "message": "Insufficient permissions"
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.client.get("/api/fees").await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(h.router.current_path(), "/forbidden");
    // 403 is an authorization failure, never a session failure
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn test_expired_token_refreshes_and_propagates_original_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "TOKEN_EXPIRED",
            "message": "Access token expired"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-jwt-token"
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.client.get("/api/students").await.unwrap_err();

    // The failed call surfaces; the caller decides whether to re-issue
    assert_eq!(err.status(), Some(401));
    assert_eq!(h.session.access_token().as_deref(), Some("fresh-jwt-token"));
    assert_eq!(h.router.current_path(), "/");
}

#[tokio::test]
async fn test_failed_refresh_clears_session_and_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "TOKEN_EXPIRED",
            "message": "Access token expired"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "REFRESH_EXPIRED",
            "message": "Refresh token expired"
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.client.get("/api/students").await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.router.current_path(), "/login");
}

#[tokio::test]
async fn test_unauthorized_login_does_not_trigger_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "INVALID_CREDENTIALS",
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let h = anonymous_harness(&server);
    let err = h
        .client
        .post(
            "/api/auth/login",
            json!({"email": "a@b.test", "password": "nope"}),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(h.router.current_path(), "/");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/auth/refresh"));
}

#[tokio::test]
async fn test_network_failure_passes_through_without_side_effects() {
    // A pooled server keeps listening after drop; a dedicated one shuts
    // down, which is what this test needs to simulate a network outage.
    let server = MockServer::builder().start().await;
    let h = harness(&server);
    drop(server);

    let err = h.client.get("/api/students").await.unwrap_err();

    assert!(matches!(err, ClientError::Http { .. }));
    assert_eq!(err.status(), None);
    assert!(h.session.is_authenticated());
    assert_eq!(h.router.current_path(), "/");
}

#[tokio::test]
async fn test_error_body_envelope_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {"code": "VALIDATION", "message": "Bad filter", "field": "grade"}
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    let err = h.client.get("/api/students").await.unwrap_err();

    match err {
        ClientError::Api { status, code, message, .. } => {
            assert_eq!(status, 422);
            assert_eq!(code, "VALIDATION");
            assert_eq!(message, "Bad filter");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
