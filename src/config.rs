//! File and environment configuration.
//!
//! ```yaml
//! service_url: https://api.eu-de.assistant.watson.cloud.ibm.com/instances/abc
//! version: 2021-06-14
//! # api_key: usually supplied through ASSISTANT_APIKEY
//! timeout_secs: 30
//! headers:
//!   X-Watson-Learning-Opt-Out: "true"
//! ```
//!
//! Environment variables override file values; see [`AssistantConfig::with_env_overrides`].
//! Credentials are the exception: the ones written in the file are used as given,
//! otherwise [`Authenticator::from_env`] looks in the keyring and then the environment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::path::Path;

use crate::auth::Authenticator;
use crate::{Error, ErrorContext, Result};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub service_url: Option<String>,
    pub version: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bearer_token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub headers: BTreeMap<String, String>,
}

impl AssistantConfig {
    /// Settings from the environment alone.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid configuration: {}", e),
                ErrorContext::new().with_source("yaml"),
            )
        })
    }

    /// Read a YAML file and apply environment overrides on top.
    pub async fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::configuration_with_context(
                format!("failed to read configuration: {}", e),
                ErrorContext::new().with_source(path.to_string_lossy().to_string()),
            )
        })?;
        Ok(Self::from_yaml_str(&content)?.with_env_overrides())
    }

    /// Overlay `ASSISTANT_URL`, `ASSISTANT_VERSION` and `ASSISTANT_HTTP_TIMEOUT_SECS`
    /// where they are set. Credential variables are read by [`Self::authenticator`].
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("ASSISTANT_URL") {
            self.service_url = Some(v);
        }
        if let Some(v) = lookup("ASSISTANT_VERSION") {
            self.version = Some(v);
        }
        if let Some(v) = lookup("ASSISTANT_HTTP_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.timeout_secs = Some(v);
        }
        self
    }

    /// Credentials named in the config, else the keyring and environment.
    pub fn authenticator(&self) -> Authenticator {
        self.file_authenticator().unwrap_or_else(Authenticator::from_env)
    }

    fn file_authenticator(&self) -> Option<Authenticator> {
        if let Some(key) = &self.api_key {
            return Some(Authenticator::api_key(key.clone()));
        }
        if let Some(token) = &self.bearer_token {
            return Some(Authenticator::bearer(token.clone()));
        }
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(Authenticator::basic(user.clone(), pass.clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("AssistantConfig")
            .field("service_url", &self.service_url)
            .field("version", &self.version)
            .field("api_key", &redact(&self.api_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("bearer_token", &redact(&self.bearer_token))
            .field("timeout_secs", &self.timeout_secs)
            .field("headers", &self.headers)
            .finish()
    }
}
