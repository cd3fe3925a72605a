use crate::{Guard, GuardOutcome, Route};

use campus_session::SessionStore;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

/// Allows navigation when the user holds at least one of the required
/// permissions. Super admin passes unconditionally.
pub struct PermissionGuard {
    session: Arc<SessionStore>,
    required: HashSet<String>,
}

impl PermissionGuard {
    pub fn new(session: Arc<SessionStore>, required: &[&str]) -> Self {
        Self {
            session,
            required: required.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Guard for PermissionGuard {
    async fn check(&self, _target: &Route) -> GuardOutcome {
        match self.session.current_user() {
            Some(user) if user.has_any_permission(&self.required) => GuardOutcome::Allow,
            _ => GuardOutcome::Redirect(Route::schools()),
        }
    }
}
