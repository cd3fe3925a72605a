use crate::{Guard, GuardOutcome, Route};

use campus_session::SessionStore;

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

/// Denies navigation to unauthenticated callers; restores the profile
/// after a reload before letting the navigation proceed.
pub struct AuthGuard {
    session: Arc<SessionStore>,
}

impl AuthGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Guard for AuthGuard {
    async fn check(&self, _target: &Route) -> GuardOutcome {
        if !self.session.is_authenticated() {
            return GuardOutcome::Redirect(Route::login());
        }

        if self.session.current_user().is_some() {
            return GuardOutcome::Allow;
        }

        // Fresh reload: token restored from durable storage but no cached
        // profile yet. The one asynchronous suspension in any guard.
        match self.session.fetch_current_user().await {
            Ok(_) => GuardOutcome::Allow,
            Err(e) => {
                warn!("Session restore failed: {e}");
                self.session.clear_session();
                GuardOutcome::Redirect(Route::login())
            }
        }
    }
}
