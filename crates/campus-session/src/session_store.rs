use crate::{
    ACCESS_TOKEN_KEY, AuthApi, CredentialStore, REFRESH_TOKEN_KEY, SessionError, SessionResult,
};

use campus_core::UserProfile;

use std::sync::{PoisonError, RwLock};

use log::{debug, info};
use tokio::task::JoinHandle;

/// Single source of truth for "is the caller authenticated, and as whom."
///
/// Constructed once at the composition root and shared by reference with
/// the request pipeline and the guards. Token mutations write through to
/// durable storage synchronously with the in-memory change, so a reload
/// mid-session never observes a state more authenticated than memory.
pub struct SessionStore {
    creds: Box<dyn CredentialStore>,
    api: AuthApi,
    user: RwLock<Option<UserProfile>>,
}

impl SessionStore {
    pub fn new(creds: Box<dyn CredentialStore>, api: AuthApi) -> Self {
        Self {
            creds,
            api,
            user: RwLock::new(None),
        }
    }

    /// True iff a non-empty access token is present in durable storage.
    /// Pure predicate, no network call.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// The current access token, if any. Empty strings count as absent.
    pub fn access_token(&self) -> Option<String> {
        self.creds.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The cached profile, or `None` if not yet loaded this process.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Authenticate and store both tokens durably.
    ///
    /// Returns the profile embedded in the login response without caching
    /// it: callers needing permissions must still call
    /// `fetch_current_user`, which caches the full profile.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<UserProfile> {
        let response = self.api.login(email, password).await?;

        self.creds.put(ACCESS_TOKEN_KEY, &response.access_token);
        self.creds.put(REFRESH_TOKEN_KEY, &response.refresh_token);

        info!("Login succeeded for {email}");
        Ok(response.user)
    }

    /// Fetch and cache the full profile using the current access token.
    ///
    /// On failure (typically 401) session state is left untouched; the
    /// caller or guard decides whether to clear.
    pub async fn fetch_current_user(&self) -> SessionResult<UserProfile> {
        let token = self
            .access_token()
            .ok_or_else(SessionError::not_authenticated)?;

        let profile = self.api.fetch_profile(&token).await?;

        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(profile.clone());
        debug!("Cached profile for user {}", profile.id);
        Ok(profile)
    }

    /// Single refresh attempt. A 401 here is terminal: the session is
    /// cleared before the error is returned.
    pub async fn refresh_access_token(&self) -> SessionResult<String> {
        let refresh_token = self
            .creds
            .get(REFRESH_TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .ok_or_else(SessionError::no_refresh_token)?;

        match self.api.refresh(&refresh_token).await {
            Ok(response) => {
                self.creds.put(ACCESS_TOKEN_KEY, &response.access_token);
                debug!("Access token refreshed");
                Ok(response.access_token)
            }
            Err(e) => {
                if e.is_unauthorized() {
                    self.clear_session();
                }
                Err(e)
            }
        }
    }

    /// Idempotent; erases tokens from durable storage and the in-memory
    /// user. No network side effect, never fails.
    pub fn clear_session(&self) {
        self.creds.remove(ACCESS_TOKEN_KEY);
        self.creds.remove(REFRESH_TOKEN_KEY);
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
        debug!("Session cleared");
    }

    /// Clear the session unconditionally, then tell the backend
    /// best-effort. The client-side effect does not wait on the network.
    ///
    /// The notification is spawned on the current tokio runtime (callers
    /// must be inside one). Its handle is returned so a caller about to
    /// exit can await the delivery; `None` when there was no token to
    /// revoke.
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let token = self.access_token();
        self.clear_session();

        let task = token.map(|token| {
            let api = self.api.clone();
            tokio::spawn(async move {
                if let Err(e) = api.logout(&token).await {
                    debug!("Logout notification failed: {e}");
                }
            })
        });

        info!("Logged out");
        task
    }
}
