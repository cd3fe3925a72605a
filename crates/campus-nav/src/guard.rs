use crate::Route;

use async_trait::async_trait;

/// Decision of a single guard over a pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

/// A navigation gate evaluated before a route is committed.
///
/// Guards are pure decisions over session/tenant state; the only
/// mutation any of them performs is the implied redirect, applied by the
/// `NavigationGate`. `check` is async solely for the authentication
/// guard's profile fetch; every other guard returns immediately.
#[async_trait]
pub trait Guard: Send + Sync {
    async fn check(&self, target: &Route) -> GuardOutcome;
}
