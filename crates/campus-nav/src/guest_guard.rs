use crate::{Guard, GuardOutcome, Route};

use campus_session::SessionStore;

use std::sync::Arc;

use async_trait::async_trait;

/// Inverse of the authentication guard: keeps authenticated users away
/// from guest-only views (login, password reset).
pub struct GuestGuard {
    session: Arc<SessionStore>,
}

impl GuestGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Guard for GuestGuard {
    async fn check(&self, _target: &Route) -> GuardOutcome {
        if self.session.is_authenticated() {
            GuardOutcome::Redirect(Route::schools())
        } else {
            GuardOutcome::Allow
        }
    }
}
