use crate::{Guard, GuardOutcome, Route, TenantResolver};

use campus_session::SessionStore;

use std::sync::Arc;

use async_trait::async_trait;

/// Requires both authentication and a resolvable school id the user may
/// access. Runs after `AuthGuard`, so the profile is normally cached.
pub struct TenantGuard {
    session: Arc<SessionStore>,
}

impl TenantGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Guard for TenantGuard {
    async fn check(&self, target: &Route) -> GuardOutcome {
        if !self.session.is_authenticated() {
            return GuardOutcome::Redirect(Route::login());
        }

        let Some(school_id) = TenantResolver::school_id_in(target) else {
            // Tenant-scoped view reached without a school in the path
            return GuardOutcome::Redirect(Route::schools());
        };

        let Some(user) = self.session.current_user() else {
            return GuardOutcome::Redirect(Route::login());
        };

        if user.may_access_school(&school_id) {
            return GuardOutcome::Allow;
        }

        // Unauthorized school: send single-school users to their own
        // dashboard, everyone else to the picker.
        let schools = user.schools();
        if schools.len() == 1 {
            GuardOutcome::Redirect(Route::school_dashboard(&schools[0].id))
        } else {
            GuardOutcome::Redirect(Route::schools())
        }
    }
}
