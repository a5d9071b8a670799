//! Workspace models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::JsonMap;
use super::dialog_node::{CreateDialogNode, DialogNode};
use super::entity::{CreateEntity, Entity};
use super::intent::{CreateCounterexample, CreateIntent, Counterexample, Intent};

/// Documented values of [`Workspace::status`].
pub mod workspace_status {
    pub const NON_EXISTENT: &str = "Non Existent";
    pub const TRAINING: &str = "Training";
    pub const FAILED: &str = "Failed";
    pub const AVAILABLE: &str = "Available";
    pub const UNAVAILABLE: &str = "Unavailable";
}

/// A workspace as returned by the service.
///
/// `workspace_id`, `status`, `created` and `updated` are assigned by the service
/// and only readable; build a [`CreateWorkspace`] to send one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

impl Workspace {
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn is_available(&self) -> bool {
        self.status() == Some(workspace_status::AVAILABLE)
    }
}

/// Body of `create_workspace` and `update_workspace`.
///
/// Every field is optional; unset fields are left out of the JSON so the service
/// applies its default (create) or keeps the current value (update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkspace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<CreateIntent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<CreateEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<CreateDialogNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<CreateCounterexample>>,
}

/// Updates take the same sparse shape as creates.
pub type UpdateWorkspace = CreateWorkspace;

impl CreateWorkspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_metadata(mut self, metadata: JsonMap) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_learning_opt_out(mut self, opt_out: bool) -> Self {
        self.learning_opt_out = Some(opt_out);
        self
    }

    pub fn with_system_settings(mut self, settings: WorkspaceSystemSettings) -> Self {
        self.system_settings = Some(settings);
        self
    }

    pub fn with_intent(mut self, intent: CreateIntent) -> Self {
        self.intents.get_or_insert_with(Vec::new).push(intent);
        self
    }

    pub fn with_entity(mut self, entity: CreateEntity) -> Self {
        self.entities.get_or_insert_with(Vec::new).push(entity);
        self
    }

    pub fn with_dialog_node(mut self, node: CreateDialogNode) -> Self {
        self.dialog_nodes.get_or_insert_with(Vec::new).push(node);
        self
    }

    pub fn with_counterexample(mut self, text: impl Into<String>) -> Self {
        self.counterexamples
            .get_or_insert_with(Vec::new)
            .push(CreateCounterexample::new(text));
        self
    }

    pub fn with_webhook(mut self, webhook: Webhook) -> Self {
        self.webhooks.get_or_insert_with(Vec::new).push(webhook);
        self
    }
}

/// Global settings of a workspace. Keys this crate does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSystemSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<ToolingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<DisambiguationSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_agent_assist: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_entities: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_topic: Option<EnabledFlag>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_generic_responses: Option<bool>,
}

/// Documented values of [`DisambiguationSettings::sensitivity`].
pub mod disambiguation_sensitivity {
    pub const AUTO: &str = "auto";
    pub const HIGH: &str = "high";
    pub const MEDIUM_HIGH: &str = "medium_high";
    pub const MEDIUM: &str = "medium";
    pub const MEDIUM_LOW: &str = "medium_low";
    pub const LOW: &str = "low";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisambiguationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of_the_above_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_text_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledFlag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Webhook called by dialog nodes with a `webhook` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<WebhookHeader>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_body() {
        let body = serde_json::to_value(CreateWorkspace::new("Pizza bot")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Pizza bot"}));
    }

    #[test]
    fn test_server_fields_are_read_only() {
        let body = r#"{
            "workspace_id": "w1",
            "name": "Pizza bot",
            "status": "Available",
            "created": "2015-12-06T23:53:59.153Z",
            "updated": "2015-12-07T18:53:59.153Z",
            "learning_opt_out": false
        }"#;
        let ws: Workspace = serde_json::from_str(body).unwrap();
        assert_eq!(ws.workspace_id(), Some("w1"));
        assert!(ws.is_available());
        assert!(ws.created().unwrap() < ws.updated().unwrap());
        assert_eq!(ws.learning_opt_out, Some(false));
    }

    #[test]
    fn test_system_settings_keep_unknown_keys() {
        let body = r#"{"disambiguation": {"enabled": true, "sensitivity": "high"}, "nlp": {"model": "baseline"}}"#;
        let settings: WorkspaceSystemSettings = serde_json::from_str(body).unwrap();
        let disambiguation = settings.disambiguation.as_ref().unwrap();
        assert_eq!(
            disambiguation.sensitivity.as_deref(),
            Some(disambiguation_sensitivity::HIGH)
        );
        assert!(settings.extra.contains_key("nlp"));
        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["nlp"]["model"], "baseline");
    }
}
