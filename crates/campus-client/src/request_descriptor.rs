use reqwest::Method;
use serde_json::Value;

/// An outbound request as seen by the pipeline stages.
///
/// `url` starts as the call site's path (e.g. `/api/users`) and becomes an
/// absolute URL once the rewrite stage has matched it; `api` records that
/// match so later stages know the request is eligible for credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub api: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            url: path.to_string(),
            headers: Vec::new(),
            body: None,
            api: false,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn push_header(&mut self, name: &str, value: String) {
        self.headers.push((name.to_string(), value));
    }

    /// First header with the given name, if any (names compared
    /// case-insensitively, as on the wire).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
