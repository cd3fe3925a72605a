use campus_nav::{Route, Router};
use campus_session::SessionStore;

use std::sync::Arc;

use log::{debug, warn};

/// Reacts to failed API responses with session and navigation side
/// effects. The failed call's error is always propagated by the caller;
/// this handler never swallows or retries it.
pub struct FailureHandler {
    session: Arc<SessionStore>,
    router: Arc<Router>,
}

impl FailureHandler {
    pub fn new(session: Arc<SessionStore>, router: Arc<Router>) -> Self {
        Self { session, router }
    }

    /// Apply side effects for a failed request.
    ///
    /// `status` is `None` for network-level failures, which pass through
    /// untouched. A 401 triggers one refresh attempt; on refresh failure
    /// the session is cleared and the user lands on the login screen. A
    /// 403 navigates to the forbidden screen. Auth endpoints are exempt
    /// from the 401 handling so a failed login or refresh cannot recurse.
    pub async fn on_failure(&self, request_path: &str, status: Option<u16>) {
        match status {
            Some(401) => {
                if Self::is_auth_endpoint(request_path) {
                    return;
                }
                match self.session.refresh_access_token().await {
                    Ok(_) => {
                        debug!("Token refreshed after 401 on {request_path}");
                    }
                    Err(e) => {
                        warn!("Refresh after 401 on {request_path} failed: {e}");
                        self.session.clear_session();
                        self.router.replace(Route::login());
                    }
                }
            }
            Some(403) => {
                warn!("Access denied on {request_path}");
                self.router.replace(Route::forbidden());
            }
            _ => {}
        }
    }

    fn is_auth_endpoint(path: &str) -> bool {
        path.ends_with("/auth/login") || path.ends_with("/auth/refresh")
    }
}
