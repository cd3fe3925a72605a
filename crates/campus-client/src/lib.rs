pub mod api_client;
pub mod api_rewrite_stage;
pub mod bearer_auth_stage;
pub mod error;
pub mod failure_handler;
pub mod pipeline;
pub mod request_descriptor;
pub mod request_stage;
pub mod tenant_header_stage;

pub use api_client::ApiClient;
pub use api_rewrite_stage::ApiRewriteStage;
pub use bearer_auth_stage::BearerAuthStage;
pub use error::{ClientError, ClientResult};
pub use failure_handler::FailureHandler;
pub use pipeline::RequestPipeline;
pub use request_descriptor::RequestDescriptor;
pub use request_stage::RequestStage;
pub use tenant_header_stage::TenantHeaderStage;
