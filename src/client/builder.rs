use crate::auth::{Authenticator, Credentials, DEFAULT_SERVICE_URL};
use crate::client::core::{AssistantClient, ClientInner};
use crate::config::AssistantConfig;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`AssistantClient`].
///
/// `version` is the only required setting. Everything else defaults to the
/// public service URL, no authentication and a `reqwest` transport.
pub struct AssistantClientBuilder {
    version: Option<String>,
    service_url: Option<String>,
    authenticator: Option<Authenticator>,
    transport: Option<Arc<dyn Transport>>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl AssistantClientBuilder {
    pub fn new() -> Self {
        Self {
            version: None,
            service_url: None,
            authenticator: None,
            transport: None,
            timeout: None,
            headers: Vec::new(),
        }
    }

    /// Builder preloaded from the environment (see [`AssistantConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::from_config(&AssistantConfig::from_env())
    }

    /// Builder preloaded from a resolved [`AssistantConfig`].
    pub fn from_config(config: &AssistantConfig) -> Self {
        let mut builder = Self::new().authenticator(config.authenticator());
        builder.version = config.version.clone();
        builder.service_url = config.service_url.clone();
        builder.timeout = config.timeout_secs.map(Duration::from_secs);
        builder.headers = config
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        builder
    }

    /// API version date, e.g. `2021-06-14`. Sent as `version` on every request.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Service instance URL. Primarily overridden for regional endpoints and mock servers.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.service_url = Some(credentials.service_url().to_string());
        self.authenticator = Some(credentials.authenticator().clone());
        self
    }

    /// Replace the default `reqwest` transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Timeout of the default transport; ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Extra header sent on every request (e.g. `X-Watson-Learning-Opt-Out`).
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AssistantClient> {
        let version = self
            .version
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "an API version date is required",
                    ErrorContext::new()
                        .with_field_path("version")
                        .with_details("set it on the builder or through ASSISTANT_VERSION"),
                )
            })?;

        let service_url = self
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let credentials = Credentials::new(
            &service_url,
            self.authenticator.unwrap_or(Authenticator::NoAuth),
        )?;

        let default_headers = header_map(&self.headers)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let http = match self.timeout {
                    Some(timeout) => HttpTransport::with_timeout(timeout),
                    None => HttpTransport::new(),
                }
                .map_err(|e| Error::configuration(format!("failed to build HTTP transport: {}", e)))?;
                Arc::new(http)
            }
        };

        Ok(AssistantClient {
            inner: Arc::new(ClientInner {
                credentials,
                version,
                transport,
                default_headers,
            }),
        })
    }
}

impl Default for AssistantClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let invalid = |details: String| {
            Error::configuration_with_context(
                "invalid default header",
                ErrorContext::new().with_field_path(name.clone()).with_details(details),
            )
        };
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}
