use crate::{
    ApiRewriteStage, BearerAuthStage, RequestDescriptor, RequestStage, TenantHeaderStage,
};

use campus_nav::TenantResolver;
use campus_session::SessionStore;

use std::sync::Arc;

/// Ordered chain of request stages.
///
/// Order matters: the rewrite stage must run first so the credential
/// stages see the `api` flag it sets.
pub struct RequestPipeline {
    stages: Vec<Box<dyn RequestStage>>,
}

impl RequestPipeline {
    pub fn new(stages: Vec<Box<dyn RequestStage>>) -> Self {
        Self { stages }
    }

    /// The standard chain: rewrite, then bearer token, then tenant header.
    pub fn standard(
        prefix: &str,
        base_url: &str,
        tenant_header: &str,
        session: Arc<SessionStore>,
        resolver: TenantResolver,
    ) -> Self {
        Self::new(vec![
            Box::new(ApiRewriteStage::new(prefix, base_url)),
            Box::new(BearerAuthStage::new(session)),
            Box::new(TenantHeaderStage::new(tenant_header, resolver)),
        ])
    }

    pub fn apply(&self, req: RequestDescriptor) -> RequestDescriptor {
        self.stages
            .iter()
            .fold(req, |req, stage| stage.apply(req))
    }
}
