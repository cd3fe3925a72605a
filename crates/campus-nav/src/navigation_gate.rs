use crate::{Guard, GuardOutcome, Route, Router};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Evaluates a route's guards in order before committing a navigation.
///
/// Supersede policy: every `commit` bumps a generation counter, and an
/// outcome produced by an earlier, still-suspended commit is discarded
/// once a newer one has started. A superseded commit returns `false`
/// without touching the router.
pub struct NavigationGate {
    router: Arc<Router>,
    generation: AtomicU64,
}

impl NavigationGate {
    pub fn new(router: Arc<Router>) -> Self {
        Self {
            router,
            generation: AtomicU64::new(0),
        }
    }

    /// Navigate to `target` if every guard allows it.
    ///
    /// Returns `true` when the navigation was committed; `false` when a
    /// guard redirected or a later commit superseded this one.
    pub async fn commit(&self, target: Route, guards: &[Arc<dyn Guard>]) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        for guard in guards {
            let outcome = guard.check(&target).await;

            if self.generation.load(Ordering::SeqCst) != generation {
                debug!("Navigation to {target} superseded mid-check");
                return false;
            }

            if let GuardOutcome::Redirect(to) = outcome {
                debug!("Navigation to {target} denied, redirecting to {to}");
                self.router.replace(to);
                return false;
            }
        }

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Navigation to {target} superseded mid-check");
            return false;
        }

        self.router.replace(target);
        true
    }
}
