use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_PREFIX, DEFAULT_TENANT_HEADER};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL the API prefix is rewritten to.
    pub base_url: String,
    /// Leading path segment marking a request as an API call.
    pub prefix: String,
    /// Header carrying the active school id on tenant-scoped requests.
    pub tenant_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            prefix: DEFAULT_API_PREFIX.to_string(),
            tenant_header: DEFAULT_TENANT_HEADER.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::api(
                "api.base_url must start with http:// or https://",
            ));
        }

        if !self.prefix.starts_with('/') || self.prefix.len() < 2 {
            return Err(ConfigError::api(
                "api.prefix must be a non-empty path segment starting with '/'",
            ));
        }

        if self.tenant_header.is_empty() || self.tenant_header.contains(char::is_whitespace) {
            return Err(ConfigError::api(
                "api.tenant_header must be a valid header name",
            ));
        }

        Ok(())
    }
}
