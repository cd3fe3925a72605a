use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:8000/api"));
    assert_that!(config.api.prefix.as_str(), eq("/api"));
    assert_that!(config.api.tenant_header.as_str(), eq("X-School-Id"));
    assert_that!(config.storage.credentials_file.as_str(), eq("credentials.json"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_file_when_load_then_values_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://api.campus.example/v1"
            prefix = "/api"

            [logging]
            level = "debug"
            colored = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://api.campus.example/v1"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://from-file.example/api"
        "#,
    )
    .unwrap();
    let _base = EnvGuard::set("CAMPUS_API_BASE_URL", "https://from-env.example/api");
    let _level = EnvGuard::set("CAMPUS_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://from-env.example/api"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Trace));
}

#[test]
#[serial]
fn given_config_dir_env_when_resolving_then_it_takes_priority() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir, eq(&temp.path().to_path_buf()));
}

#[test]
#[serial]
fn given_credentials_file_when_resolving_path_then_joined_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.credentials_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("credentials.json")));
}
