//! Conversational turn payloads for the `message` operation.
//!
//! Conversation state lives entirely in [`Context`]: the service returns it with
//! every [`MessageResponse`] and expects it back on the next [`MessageRequest`].
//! [`MessageRequest::follow_up`] does that hand-off.

use serde::{Deserialize, Serialize};

use super::common::JsonMap;
use super::dialog_node::DialogNodeAction;
use super::generic::RuntimeResponseGeneric;

/// User input of one turn. Keys this crate does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl MessageInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Conversation state echoed between turns.
///
/// `conversation_id`, `system` and `metadata` are typed; every other key (the
/// skill's context variables) lands in `variables` and is sent back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,
    #[serde(flatten)]
    pub variables: JsonMap,
}

impl Context {
    pub fn variable(&self, name: &str) -> Option<&serde_json::Value> {
        self.variables.get(name)
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.variables.insert(name.into(), value);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<u32>>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<JsonMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<JsonMap>,
}

/// Regex capture group of a pattern entity match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeVisitedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// Documented values of [`LogMessage::level`].
pub mod log_level {
    pub const INFO: &str = "info";
    pub const ERROR: &str = "error";
    pub const WARN: &str = "warn";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: String,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<JsonMap>,
}

/// Dialog output of one turn. Keys this crate does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_messages: Vec<LogMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<RuntimeResponseGeneric>>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Body of the `message` operation.
///
/// Only the fields that are set are sent; a request with just `input` serializes
/// to `{"input": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MessageRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            input: Some(MessageInput::text(text)),
            ..Self::default()
        }
    }

    /// Next turn of a conversation: `text` plus the context of `previous`.
    pub fn follow_up(previous: &MessageResponse, text: impl Into<String>) -> Self {
        Self::text(text).with_context(previous.context.clone())
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_alternate_intents(mut self, enabled: bool) -> Self {
        self.alternate_intents = Some(enabled);
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub input: MessageInput,
    #[serde(default)]
    pub intents: Vec<RuntimeIntent>,
    #[serde(default)]
    pub entities: Vec<RuntimeEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(default)]
    pub context: Context,
    #[serde(default)]
    pub output: OutputData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MessageResponse {
    /// Highest-confidence intent, if any was detected.
    pub fn top_intent(&self) -> Option<&RuntimeIntent> {
        self.intents
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// All text the assistant produced this turn: generic `text` items, or the
    /// legacy `output.text` list when no generic items are present.
    pub fn texts(&self) -> Vec<&str> {
        match &self.output.generic {
            Some(generic) if !generic.is_empty() => {
                generic.iter().filter_map(|g| g.as_text()).collect()
            }
            _ => self.output.text.iter().map(String::as_str).collect(),
        }
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.context.conversation_id.as_deref()
    }
}
