//! Message log entries returned by `list_logs` and `list_all_logs`.

use serde::{Deserialize, Serialize};

use super::message::{MessageRequest, MessageResponse};

/// One recorded `message` exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    #[serde(default)]
    pub request: MessageRequest,
    #[serde(default)]
    pub response: MessageResponse,
    #[serde(default)]
    log_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Log {
    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    /// Timestamps are kept as the service formats them; log entries do not
    /// always carry a zone offset.
    pub fn request_timestamp(&self) -> Option<&str> {
        self.request_timestamp.as_deref()
    }

    pub fn response_timestamp(&self) -> Option<&str> {
        self.response_timestamp.as_deref()
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry() {
        let log: Log = serde_json::from_value(serde_json::json!({
            "request": {"input": {"text": "hi"}},
            "response": {"output": {"text": ["Hello"]}, "context": {"conversation_id": "c9"}},
            "log_id": "l-1",
            "request_timestamp": "2021-05-01T12:00:00.000Z",
            "response_timestamp": "2021-05-01T12:00:00.120Z",
            "workspace_id": "w1",
            "language": "en"
        }))
        .unwrap();
        assert_eq!(log.log_id(), "l-1");
        assert_eq!(log.workspace_id(), Some("w1"));
        assert_eq!(log.response.conversation_id(), Some("c9"));
        assert_eq!(log.request.input.as_ref().unwrap().text.as_deref(), Some("hi"));
    }
}
