use crate::{SessionError, SessionResult};

use campus_core::{ApiErrorBody, UserProfile};

use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Wire client for the backend's auth endpoints.
///
/// Deliberately outside the request pipeline: a 401 from these endpoints
/// must never trigger a refresh attempt.
#[derive(Debug, Clone)]
pub struct AuthApi {
    base_url: String,
    http: ReqwestClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

impl AuthApi {
    /// Create a new auth client
    ///
    /// # Arguments
    /// * `base_url` - Backend API base URL (e.g., "http://127.0.0.1:8000/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: ReqwestClient::new(),
        }
    }

    /// Exchange credentials for a token pair and the embedded profile.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<LoginResponse> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::into_checked_json(response).await
    }

    /// Fetch the full profile (roles, permissions, schools).
    pub async fn fetch_profile(&self, access_token: &str) -> SessionResult<UserProfile> {
        let response = self
            .http
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::into_checked_json(response).await
    }

    /// Mint a new access token from the refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> SessionResult<RefreshResponse> {
        let response = self
            .http
            .post(format!("{}/auth/refresh", self.base_url))
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        Self::into_checked_json(response).await
    }

    /// Tell the backend the session ended. Callers treat this as best-effort.
    pub async fn logout(&self, access_token: &str) -> SessionResult<()> {
        let response = self
            .http
            .post(format!("{}/auth/logout", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status.as_u16(), response).await)
        }
    }

    /// Decode a successful body, or surface the backend's structured error.
    async fn into_checked_json<T: DeserializeOwned>(response: reqwest::Response) -> SessionResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(SessionError::from_reqwest);
        }

        Err(Self::status_error(status.as_u16(), response).await)
    }

    async fn status_error(status: u16, response: reqwest::Response) -> SessionError {
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let err = ApiErrorBody::from_body(&body).unwrap_or_else(|| ApiErrorBody {
            code: "UNKNOWN".to_string(),
            message: "Unknown error".to_string(),
            field: None,
        });

        SessionError::api(status, err.code, err.message)
    }
}
