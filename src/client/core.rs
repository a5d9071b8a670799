use crate::auth::Credentials;
use crate::error_code::StandardErrorCode;
use crate::transport::{Transport, TransportRequest, TransportResponse};
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use super::endpoint::Endpoint;
use super::response::{DetailedResponse, ResponseData};

/// Client for the Assistant v1 API.
///
/// Cheap to clone: clones share one immutable configuration and one transport.
/// Build it with [`crate::client::AssistantClientBuilder`].
#[derive(Clone)]
pub struct AssistantClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) credentials: Credentials,
    pub(crate) version: String,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) default_headers: HeaderMap,
}

impl std::fmt::Debug for AssistantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantClient")
            .field("service_url", &self.inner.credentials.service_url().as_str())
            .field("version", &self.inner.version)
            .field("authenticator", self.inner.credentials.authenticator())
            .finish()
    }
}

impl AssistantClient {
    /// Shorthand for [`crate::client::AssistantClientBuilder::from_env`].
    pub fn from_env() -> Result<Self> {
        super::builder::AssistantClientBuilder::from_env().build()
    }

    pub fn version(&self) -> &str {
        &self.inner.version
    }

    pub fn service_url(&self) -> &url::Url {
        self.inner.credentials.service_url()
    }

    /// Send `endpoint` and decode a 2xx body as `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<DetailedResponse<T>> {
        let operation = endpoint.operation;
        let data = self.dispatch(endpoint).await?;
        decode(operation, data)
    }

    /// Send `endpoint` where the service answers with an empty object (deletes).
    pub(crate) async fn execute_empty(&self, endpoint: Endpoint) -> Result<DetailedResponse<()>> {
        let operation = endpoint.operation;
        let data = self.dispatch(endpoint).await?;
        if data.body.trim().is_empty() {
            return Ok(DetailedResponse { result: (), data });
        }
        decode::<IgnoredAny>(operation, data).map(|r| r.map(|_| ()))
    }

    fn build_request(&self, mut endpoint: Endpoint) -> Result<TransportRequest> {
        let inner = &self.inner;
        let url = endpoint.url(inner.credentials.service_url(), &inner.version);

        let mut headers = inner.default_headers.clone();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(auth) = inner.credentials.authenticator().header_value()? {
            headers.insert(AUTHORIZATION, auth);
        }
        let body = endpoint.take_body();
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(TransportRequest {
            method: endpoint.method.clone(),
            url,
            headers,
            body,
        })
    }

    /// Hand the request to the transport and classify the status.
    async fn dispatch(&self, endpoint: Endpoint) -> Result<ResponseData> {
        let operation = endpoint.operation;
        let path = endpoint.display_path();
        let method = endpoint.method.clone();
        let request = self.build_request(endpoint)?;
        let request_id = Uuid::new_v4().to_string();

        debug!(
            operation,
            method = %method,
            path = %path,
            request_id = %request_id,
            "dispatching request"
        );

        let start = Instant::now();
        let response = match self.inner.transport.send(request).await {
            Ok(r) => r,
            Err(e) => {
                info!(
                    operation,
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    duration_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "transport failure"
                );
                return Err(e.into());
            }
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let data = response_data(response);
        if data.success {
            debug!(
                operation,
                http_status = data.status,
                duration_ms = elapsed_ms,
                "request completed"
            );
            return Ok(data);
        }

        let message = watson_error_message(&data);
        info!(
            operation,
            method = %method,
            path = %path,
            request_id = %request_id,
            http_status = data.status,
            duration_ms = elapsed_ms,
            error_message = %message,
            "request failed"
        );
        Err(Error::Remote {
            status: data.status,
            code: StandardErrorCode::from_http_status(data.status),
            message,
            data: Box::new(data),
        })
    }
}

fn response_data(response: TransportResponse) -> ResponseData {
    let success = response.is_success();
    ResponseData {
        status: response.status,
        headers: response.headers,
        body: String::from_utf8_lossy(&response.body).into_owned(),
        success,
    }
}

fn decode<T: DeserializeOwned>(operation: &str, data: ResponseData) -> Result<DetailedResponse<T>> {
    match serde_json::from_str::<T>(&data.body) {
        Ok(result) => Ok(DetailedResponse { result, data }),
        Err(e) => {
            info!(
                operation,
                http_status = data.status,
                error = %e,
                "response body did not match the expected shape"
            );
            let mut data = data;
            data.success = false;
            Err(Error::Deserialization {
                message: format!("{}: {}", operation, e),
                data: Box::new(data),
            })
        }
    }
}

/// Human-readable message of a failed exchange.
///
/// The service reports errors as `{"error": "..."}` or
/// `{"errors": [{"message": "..."}]}`; anything else falls back to the raw body,
/// then to the status reason.
pub(crate) fn watson_error_message(data: &ResponseData) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&data.body) {
        let from_error = json.get("error").and_then(|v| v.as_str());
        let from_errors = json
            .get("errors")
            .and_then(|v| v.get(0))
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str());
        if let Some(msg) = from_error.or(from_errors) {
            return msg.to_string();
        }
    }
    let body = data.body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    reqwest::StatusCode::from_u16(data.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", data.status))
}

/// Reject an empty required path or query parameter.
pub(crate) fn require<'a>(name: &str, value: &'a str, operation: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::missing_argument(name, operation));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(status: u16, body: &str) -> ResponseData {
        ResponseData {
            status,
            body: body.to_string(),
            ..ResponseData::default()
        }
    }

    #[test]
    fn test_watson_error_shapes() {
        assert_eq!(
            watson_error_message(&data(404, r#"{"error":"Resource not found","code":404}"#)),
            "Resource not found"
        );
        assert_eq!(
            watson_error_message(&data(400, r#"{"errors":[{"message":"Invalid intent name","path":".intent"}]}"#)),
            "Invalid intent name"
        );
        assert_eq!(watson_error_message(&data(500, "upstream exploded")), "upstream exploded");
        assert_eq!(watson_error_message(&data(503, "")), "Service Unavailable");
    }

    #[test]
    fn test_decode_failure_flips_success() {
        let mut ok = data(200, "<html>");
        ok.success = true;
        let err = decode::<serde_json::Value>("get_workspace", ok).unwrap_err();
        match err {
            Error::Deserialization { data, .. } => {
                assert!(!data.success);
                assert_eq!(data.body, "<html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("workspace_id", "  ", "get_workspace").unwrap_err().is_invalid_argument());
        assert_eq!(require("workspace_id", "w1", "get_workspace").unwrap(), "w1");
    }
}
