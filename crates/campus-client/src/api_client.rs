use crate::{ClientError, ClientResult, FailureHandler, RequestDescriptor, RequestPipeline};

use campus_core::ApiErrorBody;

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// HTTP client for authenticated backend calls.
///
/// Every request runs through the stage pipeline before it hits the
/// wire, and every failure runs through the failure handler before the
/// error is returned to the caller.
pub struct ApiClient {
    http: ReqwestClient,
    pipeline: RequestPipeline,
    failures: FailureHandler,
}

impl ApiClient {
    pub fn new(pipeline: RequestPipeline, failures: FailureHandler) -> Self {
        Self {
            http: ReqwestClient::new(),
            pipeline,
            failures,
        }
    }

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.execute(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.execute(Method::DELETE, path, None).await
    }

    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<Value> {
        let mut req = RequestDescriptor::new(method, path);
        if let Some(body) = body {
            req = req.with_body(body);
        }
        let req = self.pipeline.apply(req);

        let mut builder = self.http.request(req.method.clone(), &req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                self.failures.on_failure(path, None).await;
                return Err(ClientError::from_reqwest(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            let text = response.text().await.map_err(ClientError::from_reqwest)?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(ClientError::from_json);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let error = ApiErrorBody::from_body(&body).unwrap_or_else(|| ApiErrorBody {
            code: "UNKNOWN".to_string(),
            message: format!("Request failed with status {status}"),
            field: None,
        });

        self.failures.on_failure(path, Some(status.as_u16())).await;
        Err(ClientError::api(
            status.as_u16(),
            error.code,
            error.message,
        ))
    }
}
