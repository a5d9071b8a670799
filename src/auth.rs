//! Credentials and request authentication.
//!
//! Token exchange (IAM and friends) is out of scope; an [`Authenticator`] only turns
//! material the caller already has into an `Authorization` header.

use base64::Engine as _;
use keyring::Entry;
use reqwest::header::HeaderValue;
use std::env;
use std::fmt;
use url::Url;

use crate::{Error, ErrorContext, Result};

/// Public Watson Assistant endpoint used when nothing else is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.assistant.watson.cloud.ibm.com";

const KEYRING_SERVICE: &str = "watson-assistant";
const KEYRING_USER: &str = "apikey";

#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    NoAuth,
    Basic { username: String, password: String },
    BearerToken(String),
}

impl Authenticator {
    /// API keys are accepted as basic auth with the literal user name `apikey`.
    pub fn api_key(key: impl Into<String>) -> Self {
        Authenticator::Basic {
            username: "apikey".to_string(),
            password: key.into(),
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authenticator::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Authenticator::BearerToken(token.into())
    }

    /// Resolve an authenticator from the keyring and environment.
    ///
    /// Order: keyring API key, `ASSISTANT_APIKEY`, `ASSISTANT_BEARER_TOKEN`,
    /// `ASSISTANT_USERNAME` + `ASSISTANT_PASSWORD`. Falls back to `NoAuth`.
    pub fn from_env() -> Self {
        Self::resolve(Self::keyring_api_key(), non_empty_env)
    }

    pub(crate) fn resolve(
        keyring_key: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        if let Some(key) = keyring_key {
            return Self::api_key(key);
        }
        if let Some(key) = lookup("ASSISTANT_APIKEY") {
            return Self::api_key(key);
        }
        if let Some(token) = lookup("ASSISTANT_BEARER_TOKEN") {
            return Self::bearer(token);
        }
        match (lookup("ASSISTANT_USERNAME"), lookup("ASSISTANT_PASSWORD")) {
            (Some(username), Some(password)) => Self::basic(username, password),
            _ => Authenticator::NoAuth,
        }
    }

    fn keyring_api_key() -> Option<String> {
        let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
        entry.get_password().ok().filter(|k| !k.is_empty())
    }

    /// `Authorization` header value, or `None` for [`Authenticator::NoAuth`].
    pub fn header_value(&self) -> Result<Option<HeaderValue>> {
        let raw = match self {
            Authenticator::NoAuth => return Ok(None),
            Authenticator::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            Authenticator::BearerToken(token) => format!("Bearer {}", token),
        };
        let mut value = HeaderValue::from_str(&raw).map_err(|_| {
            Error::configuration_with_context(
                "credentials contain characters not allowed in an HTTP header",
                ErrorContext::new()
                    .with_field_path("credentials")
                    .with_source("authenticator"),
            )
        })?;
        value.set_sensitive(true);
        Ok(Some(value))
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authenticator::NoAuth => f.write_str("NoAuth"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Authenticator::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
        }
    }
}

/// Where to send requests and how to authenticate them.
#[derive(Debug, Clone)]
pub struct Credentials {
    service_url: Url,
    authenticator: Authenticator,
}

impl Credentials {
    pub fn new(service_url: &str, authenticator: Authenticator) -> Result<Self> {
        Ok(Self {
            service_url: parse_service_url(service_url)?,
            authenticator,
        })
    }

    /// `ASSISTANT_URL` (or the public endpoint) plus [`Authenticator::from_env`].
    pub fn from_env() -> Result<Self> {
        let url = non_empty_env("ASSISTANT_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        Self::new(&url, Authenticator::from_env())
    }

    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }
}

pub(crate) fn parse_service_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid service url: {}", e),
            ErrorContext::new()
                .with_field_path("service_url")
                .with_details(trimmed.to_string()),
        )
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "service url must be an absolute http(s) url",
            ErrorContext::new()
                .with_field_path("service_url")
                .with_details(trimmed.to_string()),
        ));
    }
    Ok(url)
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
