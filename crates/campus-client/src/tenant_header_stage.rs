use crate::{RequestDescriptor, RequestStage};

use campus_nav::TenantResolver;

/// Attaches the tenant header to API requests when the active route
/// names a school.
///
/// The school id is re-resolved from navigation state on every apply;
/// off-school routes (the picker, login) simply omit the header and the
/// backend scopes the request accordingly.
pub struct TenantHeaderStage {
    header: String,
    resolver: TenantResolver,
}

impl TenantHeaderStage {
    pub fn new(header: &str, resolver: TenantResolver) -> Self {
        Self {
            header: header.to_string(),
            resolver,
        }
    }
}

impl RequestStage for TenantHeaderStage {
    fn apply(&self, mut req: RequestDescriptor) -> RequestDescriptor {
        if !req.api {
            return req;
        }

        if let Some(school_id) = self.resolver.current_school_id() {
            req.push_header(&self.header, school_id);
        }
        req
    }
}
