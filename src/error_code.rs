//! Standard error classification for Assistant failures.
//!
//! Every failure an operation can produce maps to one [`StandardErrorCode`],
//! whether it came from an HTTP status, the transport, or a malformed payload.
//! The client never acts on these codes itself; they exist so callers can
//! decide what to retry or surface.
//!
//! | Category    | Codes                                                        |
//! |-------------|--------------------------------------------------------------|
//! | client      | invalid_request, authentication, permission_denied, not_found, conflict, request_too_large, unsupported_media_type |
//! | rate        | rate_limited                                                 |
//! | server      | server_error, unavailable, timeout, malformed_response       |
//! | unknown     | unknown                                                      |
//!
//! ## Example
//!
//! ```rust
//! use watson_assistant::error_code::StandardErrorCode;
//!
//! let code = StandardErrorCode::from_http_status(429);
//! assert_eq!(code.name(), "rate_limited");
//! assert!(code.retryable());
//! assert_eq!(code.category(), "rate");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardErrorCode {
    /// Malformed request, invalid parameters, or missing required fields (400)
    InvalidRequest,
    /// Invalid, expired, or missing credentials (401)
    Authentication,
    /// Valid credentials but insufficient permissions (403)
    PermissionDenied,
    /// Workspace, intent, entity, or other resource does not exist (404)
    NotFound,
    /// Resource already exists or was modified concurrently (409)
    Conflict,
    /// Payload exceeds the service limit (413)
    RequestTooLarge,
    /// Body was not sent as JSON (415)
    UnsupportedMediaType,
    /// Plan request rate exceeded (429)
    RateLimited,
    /// Internal error on the service side (500)
    ServerError,
    /// Service unreachable or temporarily unavailable (502, 503, connection failures)
    Unavailable,
    /// Request timed out (408, 504, transport timeout)
    Timeout,
    /// Response arrived but could not be mapped to the expected model
    MalformedResponse,
    /// Error could not be classified
    Unknown,
}

impl StandardErrorCode {
    /// Returns the standard name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::RequestTooLarge => "request_too_large",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Unavailable => "unavailable",
            Self::Timeout => "timeout",
            Self::MalformedResponse => "malformed_response",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether a caller may reasonably retry the same request.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Unavailable | Self::Timeout
        )
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::Conflict
            | Self::RequestTooLarge
            | Self::UnsupportedMediaType => "client",
            Self::RateLimited => "rate",
            Self::ServerError | Self::Unavailable | Self::Timeout | Self::MalformedResponse => {
                "server"
            }
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to the most likely `StandardErrorCode`.
    ///
    /// Statuses without a specific mapping fall back by class: other 4xx are
    /// `InvalidRequest`, other 5xx are `ServerError`, anything else is `Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            409 => Self::Conflict,
            413 => Self::RequestTooLarge,
            415 => Self::UnsupportedMediaType,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            502 | 503 => Self::Unavailable,
            400..=499 => Self::InvalidRequest,
            501..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StandardErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
