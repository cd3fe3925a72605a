mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_TENANT_HEADER: &str = "X-School-Id";
const DEFAULT_CREDENTIALS_FILENAME: &str = "credentials.json";

#[cfg(test)]
mod tests;
