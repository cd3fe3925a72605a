use crate::Route;

use std::sync::{PoisonError, RwLock};

use log::debug;

/// Holds the active route and applies navigation changes.
///
/// The explicit contract the tenant resolver and guards read from:
/// "the active path's segments, right now" - nothing is cached.
#[derive(Debug)]
pub struct Router {
    current: RwLock<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Route::root()),
        }
    }

    pub fn current_route(&self) -> Route {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_path(&self) -> String {
        self.current_route().path()
    }

    /// Replace the active route. Used both for committed navigations and
    /// for guard/interceptor redirects.
    pub fn replace(&self, route: Route) {
        debug!("Navigating to {route}");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = route;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
