use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured error body returned by the backend on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorBody {
    /// Extract the error body from a response payload.
    ///
    /// Accepts both the bare `{code, message}` shape and the enveloped
    /// `{"error": {code, message}}` shape.
    pub fn from_body(body: &Value) -> Option<Self> {
        let node = body.get("error").unwrap_or(body);
        serde_json::from_value(node.clone()).ok()
    }
}
