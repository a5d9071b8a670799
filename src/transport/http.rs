use super::{Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// `reqwest` backed transport used by default.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with env-overridable defaults.
    ///
    /// - `ASSISTANT_HTTP_TIMEOUT_SECS` (default 60)
    /// - `ASSISTANT_HTTP_POOL_MAX_IDLE_PER_HOST` (default 16)
    /// - `ASSISTANT_PROXY_URL`
    pub fn new() -> Result<Self, TransportError> {
        let timeout_secs = env::var("ASSISTANT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(Duration::from_secs(timeout_secs))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(
                env::var("ASSISTANT_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(16),
            )
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .user_agent(concat!("watson-assistant-rust/", env!("CARGO_PKG_VERSION")));

        if let Ok(proxy_url) = env::var("ASSISTANT_PROXY_URL") {
            match Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!(proxy = %proxy_url, error = %e, "ignoring invalid proxy url"),
            }
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client (custom TLS roots, middleware-free testing, ...).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
