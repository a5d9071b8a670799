use crate::client::ResponseData;
use crate::error_code::StandardErrorCode;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Parameter or configuration key that caused the error (e.g., "customer_id", "config.version")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format, offending value)
    pub details: Option<String>,
    /// Operation or component that raised the error (e.g., "delete_user_data", "config_loader")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Assistant client.
///
/// Everything that can go wrong during an operation is folded into one of these
/// variants. Errors raised after a response arrived carry its [`ResponseData`]
/// so the raw headers and body stay inspectable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {message}{}", format_context(.context))]
    InvalidArgument {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Remote error: HTTP {status} ({code}): {message}")]
    Remote {
        status: u16,
        code: StandardErrorCode,
        message: String,
        data: Box<ResponseData>,
    },

    #[error("Deserialization error: {message}")]
    Deserialization {
        message: String,
        data: Box<ResponseData>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A submitted operation panicked before producing an outcome.
    #[error("Runtime error: {message}{}", format_context(.context))]
    Runtime {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new invalid-argument error with structured context
    pub fn invalid_argument_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidArgument {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn runtime_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Runtime {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Shorthand for a required parameter that was missing or empty.
    pub(crate) fn missing_argument(name: &str, operation: &str) -> Self {
        Self::invalid_argument_with_context(
            format!("{} must be provided", name),
            ErrorContext::new()
                .with_field_path(name)
                .with_source(operation),
        )
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidArgument { context, .. }
            | Error::Configuration { context, .. }
            | Error::Runtime { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Wire-level data of the response that caused this error, if one arrived.
    pub fn response_data(&self) -> Option<&ResponseData> {
        match self {
            Error::Remote { data, .. } | Error::Deserialization { data, .. } => Some(&**data),
            _ => None,
        }
    }

    /// HTTP status of the response that caused this error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        self.response_data().map(|d| d.status)
    }

    /// Classification of this error.
    pub fn code(&self) -> StandardErrorCode {
        match self {
            Error::InvalidArgument { .. } | Error::Serialization(_) => {
                StandardErrorCode::InvalidRequest
            }
            Error::Remote { code, .. } => *code,
            Error::Transport(e) if e.is_timeout() => StandardErrorCode::Timeout,
            Error::Transport(_) => StandardErrorCode::Unavailable,
            Error::Deserialization { .. } => StandardErrorCode::MalformedResponse,
            Error::Configuration { .. } | Error::Runtime { .. } => StandardErrorCode::Unknown,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = Error::missing_argument("customer_id", "delete_user_data");
        let text = err.to_string();
        assert!(text.starts_with("Invalid argument: customer_id must be provided"));
        assert!(text.contains("field: customer_id"));
        assert!(text.contains("source: delete_user_data"));
    }

    #[test]
    fn test_remote_error_exposes_status_and_data() {
        let data = ResponseData {
            status: 404,
            body: r#"{"error":"Resource not found"}"#.to_string(),
            ..ResponseData::default()
        };
        let err = Error::Remote {
            status: 404,
            code: StandardErrorCode::from_http_status(404),
            message: "Resource not found".to_string(),
            data: Box::new(data),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.code(), StandardErrorCode::NotFound);
        assert!(err.response_data().unwrap().body.contains("not found"));
        assert!(err.context().is_none());
    }

    #[test]
    fn test_local_failures_have_no_response_data() {
        let err = Error::configuration_with_context(
            "failed to read configuration: not found",
            ErrorContext::new().with_source("/etc/assistant.yaml"),
        );
        assert_eq!(err.code(), StandardErrorCode::Unknown);
        assert!(err.response_data().is_none());
        assert!(err.status().is_none());
    }
}
