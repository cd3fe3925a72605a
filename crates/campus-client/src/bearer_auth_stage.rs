use crate::{RequestDescriptor, RequestStage};

use campus_session::SessionStore;

use std::sync::Arc;

/// Attaches `Authorization: Bearer <token>` to API requests.
///
/// The token is read from the session on every apply, so a refresh that
/// lands between two requests is picked up without re-plumbing anything.
/// Anonymous requests (no token, or an empty one) go out without the
/// header rather than with a malformed one.
pub struct BearerAuthStage {
    session: Arc<SessionStore>,
}

impl BearerAuthStage {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

impl RequestStage for BearerAuthStage {
    fn apply(&self, mut req: RequestDescriptor) -> RequestDescriptor {
        if !req.api {
            return req;
        }

        if let Some(token) = self.session.access_token() {
            req.push_header("Authorization", format!("Bearer {token}"));
        }
        req
    }
}
