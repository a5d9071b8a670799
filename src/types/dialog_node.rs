//! Dialog node models.
//!
//! Nodes form an ordered tree through `parent` and `previous_sibling`; the
//! service keeps the tree consistent, the client only carries the links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::JsonMap;
use super::generic::DialogNodeOutputGeneric;

/// Documented values of a node's `type` field.
pub mod node_type {
    pub const STANDARD: &str = "standard";
    pub const EVENT_HANDLER: &str = "event_handler";
    pub const FRAME: &str = "frame";
    pub const SLOT: &str = "slot";
    pub const RESPONSE_CONDITION: &str = "response_condition";
    pub const FOLDER: &str = "folder";
}

/// Documented values of a node's `event_name` field.
pub mod event_name {
    pub const FOCUS: &str = "focus";
    pub const INPUT: &str = "input";
    pub const FILLED: &str = "filled";
    pub const VALIDATE: &str = "validate";
    pub const FILLED_MULTIPLE: &str = "filled_multiple";
    pub const GENERIC: &str = "generic";
    pub const NOMATCH: &str = "nomatch";
    pub const NOMATCH_RESPONSES_DEPLETED: &str = "nomatch_responses_depleted";
    pub const DIGRESSION_RETURN_PROMPT: &str = "digression_return_prompt";
}

/// Documented values of `digress_in`.
pub mod digress_in {
    pub const NOT_AVAILABLE: &str = "not_available";
    pub const RETURNS: &str = "returns";
    pub const DOES_NOT_RETURN: &str = "does_not_return";
}

/// Documented values of `digress_out`.
pub mod digress_out {
    pub const ALLOW_RETURNING: &str = "allow_returning";
    pub const ALLOW_ALL: &str = "allow_all";
    pub const ALLOW_ALL_NEVER_RETURN: &str = "allow_all_never_return";
}

/// Documented values of `digress_out_slots`.
pub mod digress_out_slots {
    pub const NOT_ALLOWED: &str = "not_allowed";
    pub const ALLOW_RETURNING: &str = "allow_returning";
    pub const ALLOW_ALL: &str = "allow_all";
}

/// Documented values of [`DialogNodeNextStep::behavior`].
pub mod next_step_behavior {
    pub const GET_USER_INPUT: &str = "get_user_input";
    pub const SKIP_USER_INPUT: &str = "skip_user_input";
    pub const JUMP_TO: &str = "jump_to";
    pub const REPROMPT: &str = "reprompt";
    pub const SKIP_SLOT: &str = "skip_slot";
    pub const SKIP_ALL_SLOTS: &str = "skip_all_slots";
}

/// Documented values of [`DialogNodeNextStep::selector`].
pub mod next_step_selector {
    pub const CONDITION: &str = "condition";
    pub const CLIENT: &str = "client";
    pub const USER_INPUT: &str = "user_input";
    pub const BODY: &str = "body";
}

/// Documented values of [`DialogNodeAction::action_type`].
pub mod action_type {
    pub const CLIENT: &str = "client";
    pub const SERVER: &str = "server";
    pub const CLOUD_FUNCTION: &str = "cloud_function";
    pub const WEB_ACTION: &str = "web_action";
    pub const WEBHOOK: &str = "webhook";
}

/// What a node returns. Legacy keys (`text`, custom fields) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<DialogNodeOutputGeneric>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<DialogNodeOutputModifiers>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl DialogNodeOutput {
    pub fn generic(items: Vec<DialogNodeOutputGeneric>) -> Self {
        Self {
            generic: Some(items),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeOutputModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeNextStep {
    pub behavior: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl DialogNodeNextStep {
    pub fn jump_to(dialog_node: impl Into<String>, selector: &str) -> Self {
        Self {
            behavior: next_step_behavior::JUMP_TO.to_string(),
            dialog_node: Some(dialog_node.into()),
            selector: Some(selector.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeAction {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonMap>,
    pub result_variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// A dialog node as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNode {
    pub dialog_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
}

impl DialogNode {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Body of `create_dialog_node`; the node id is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDialogNode {
    pub dialog_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl CreateDialogNode {
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            description: None,
            conditions: None,
            parent: None,
            previous_sibling: None,
            output: None,
            context: None,
            metadata: None,
            next_step: None,
            title: None,
            node_type: None,
            event_name: None,
            variable: None,
            actions: None,
            digress_in: None,
            digress_out: None,
            digress_out_slots: None,
            user_label: None,
            disambiguation_opt_out: None,
            disabled: None,
        }
    }

    pub fn with_conditions(mut self, conditions: impl Into<String>) -> Self {
        self.conditions = Some(conditions.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_previous_sibling(mut self, sibling: impl Into<String>) -> Self {
        self.previous_sibling = Some(sibling.into());
        self
    }

    pub fn with_node_type(mut self, node_type: &str) -> Self {
        self.node_type = Some(node_type.to_string());
        self
    }

    pub fn with_output(mut self, output: DialogNodeOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_next_step(mut self, next_step: DialogNodeNextStep) -> Self {
        self.next_step = Some(next_step);
        self
    }
}

/// Sparse update of a dialog node; `dialog_node` renames it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDialogNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DialogNodeOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<DialogNodeNextStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digress_out_slots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation_opt_out: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_node_body() {
        let node = CreateDialogNode::new("welcome")
            .with_conditions("welcome")
            .with_title("Welcome")
            .with_node_type(node_type::STANDARD)
            .with_output(DialogNodeOutput::generic(vec![DialogNodeOutputGeneric::text([
                "Hello. How can I help you?",
            ])]));
        let body = serde_json::to_value(&node).unwrap();
        assert_eq!(
            body,
            json!({
                "dialog_node": "welcome",
                "conditions": "welcome",
                "title": "Welcome",
                "type": "standard",
                "output": {"generic": [{"response_type": "text", "values": [{"text": "Hello. How can I help you?"}]}]}
            })
        );
    }

    #[test]
    fn test_node_response_with_tree_links() {
        let node: DialogNode = serde_json::from_value(json!({
            "dialog_node": "node_2",
            "parent": "node_1",
            "type": "response_condition",
            "next_step": {"behavior": "jump_to", "dialog_node": "node_5", "selector": "condition"},
            "output": {"text": {"values": ["legacy"]}, "generic": [{"response_type": "pause", "time": 500, "typing": true}]},
            "created": "2021-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!node.is_root());
        assert_eq!(node.node_type.as_deref(), Some(node_type::RESPONSE_CONDITION));
        assert_eq!(
            node.next_step,
            Some(DialogNodeNextStep::jump_to("node_5", next_step_selector::CONDITION))
        );
        let output = node.output.as_ref().unwrap();
        assert!(output.extra.contains_key("text"));
        assert_eq!(output.generic.as_ref().unwrap()[0].response_type(), "pause");
        assert!(node.created().is_some());
    }
}
