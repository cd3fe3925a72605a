use crate::{Route, Router};

use std::sync::Arc;

/// Answers "what school is the current request for," purely from
/// navigation state.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    router: Arc<Router>,
}

impl TenantResolver {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    /// School id of the active route, re-resolved on every call so the
    /// answer always reflects the navigation state at the moment a
    /// request is issued. Safe before the route has resolved.
    pub fn current_school_id(&self) -> Option<String> {
        Self::school_id_in(&self.router.current_route())
    }

    /// School id carried by any route: the segment following `schools`,
    /// wherever it appears in the path.
    pub fn school_id_in(route: &Route) -> Option<String> {
        let segments = route.segments();
        segments
            .iter()
            .position(|s| s == "schools")
            .and_then(|i| segments.get(i + 1))
            .cloned()
    }
}
