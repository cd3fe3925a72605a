//! Integration tests wiring the full context against a wiremock backend

use campus_cli::AppContext;
use campus_config::Config;
use campus_nav::Route;

use std::env;

use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

/// RAII guard for environment variables - automatically restores on drop
struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point the config dir at a temp dir and aim the API at the mock server.
fn setup(server: &MockServer) -> (TempDir, EnvGuard, Config) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("CAMPUS_CONFIG_DIR", temp.path().to_str().unwrap());

    let mut config = Config::default();
    config.api.base_url = server.uri();
    (temp, guard, config)
}

fn login_mock() -> Mock {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "my-jwt-token",
            "refresh_token": "my-refresh-token",
            "user": {
                "id": "user-1",
                "email": "admin@school.test",
                "roles": [],
                "permissions": []
            }
        })))
}

#[tokio::test]
#[serial]
async fn test_login_persists_credentials_for_the_next_invocation() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    let (temp, _guard, config) = setup(&server);

    {
        let ctx = AppContext::new(config.clone()).unwrap();
        ctx.session
            .login("admin@school.test", "hunter2")
            .await
            .unwrap();
        assert!(ctx.session.is_authenticated());
    }
    assert!(temp.path().join("credentials.json").exists());

    // A fresh context (next CLI invocation) restores the session from disk
    let ctx = AppContext::new(config).unwrap();
    assert!(ctx.session.is_authenticated());
    assert_eq!(
        ctx.session.access_token().as_deref(),
        Some("my-jwt-token")
    );
}

#[tokio::test]
#[serial]
async fn test_get_through_wired_pipeline_carries_credentials() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .and(header("Authorization", "Bearer my-jwt-token"))
        .and(header("X-School-Id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (_temp, _guard, config) = setup(&server);
    let ctx = AppContext::new(config).unwrap();
    ctx.session
        .login("admin@school.test", "hunter2")
        .await
        .unwrap();

    ctx.router.replace(Route::parse("/schools/42/students"));
    let body = ctx.client.get("/api/students").await.unwrap();

    assert_eq!(body, json!([]));
}

#[tokio::test]
#[serial]
async fn test_load_config_applies_server_override() {
    let server = MockServer::start().await;
    let (_temp, _guard, _config) = setup(&server);

    let config = AppContext::load_config(Some("https://override.example/api".to_string())).unwrap();

    assert_eq!(config.api.base_url, "https://override.example/api");
}
