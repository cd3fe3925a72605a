use crate::{RequestDescriptor, RequestStage};

/// Rewrites prefixed paths to absolute backend URLs.
///
/// A path matches when it equals the prefix or continues it with `/`
/// (`/api` matches `/api/users` but not `/api-docs`). Everything else
/// passes through untouched, so asset and third-party requests never
/// gain credentials downstream.
pub struct ApiRewriteStage {
    prefix: String,
    base_url: String,
}

impl ApiRewriteStage {
    pub fn new(prefix: &str, base_url: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        path == self.prefix || path.starts_with(&format!("{}/", self.prefix))
    }
}

impl RequestStage for ApiRewriteStage {
    fn apply(&self, mut req: RequestDescriptor) -> RequestDescriptor {
        if !self.matches(&req.url) {
            return req;
        }

        let rest = &req.url[self.prefix.len()..];
        req.url = format!("{}{rest}", self.base_url);
        req.api = true;
        req
    }
}
