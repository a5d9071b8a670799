//! Pagination descriptors and the list wrappers returned by every `list_*` operation.

use serde::{Deserialize, Serialize};

use super::dialog_node::DialogNode;
use super::entity::{Entity, EntityMention, Synonym, Value};
use super::intent::{Counterexample, Example, Intent};
use super::log::Log;
use super::workspace::Workspace;

/// Free-form JSON object used for metadata, context variables and similar bags.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Pagination block shared by the resource collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Pagination block of the log endpoints (no refresh cursor, no total).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Uniform view over every list response.
///
/// Callers page through results by passing `next_cursor()` back as
/// [`crate::client::ListOptions::cursor`] until it returns `None`.
pub trait Paginated {
    type Item;

    fn items(&self) -> &[Self::Item];
    fn into_items(self) -> Vec<Self::Item>;
    fn next_cursor(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentCollection {
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleCollection {
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    #[serde(default)]
    pub counterexamples: Vec<Counterexample>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCollection {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Examples across all intents that mention a given entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMentionCollection {
    #[serde(default)]
    pub examples: Vec<EntityMention>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCollection {
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymCollection {
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeCollection {
    #[serde(default)]
    pub dialog_nodes: Vec<DialogNode>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogCollection {
    #[serde(default)]
    pub logs: Vec<Log>,
    #[serde(default)]
    pub pagination: LogPagination,
}

macro_rules! impl_paginated {
    ($($collection:ty => $field:ident: $item:ty),+ $(,)?) => {
        $(
            impl Paginated for $collection {
                type Item = $item;

                fn items(&self) -> &[$item] {
                    &self.$field
                }

                fn into_items(self) -> Vec<$item> {
                    self.$field
                }

                fn next_cursor(&self) -> Option<&str> {
                    self.pagination.next_cursor.as_deref()
                }
            }
        )+
    };
}

impl_paginated! {
    WorkspaceCollection => workspaces: Workspace,
    IntentCollection => intents: Intent,
    ExampleCollection => examples: Example,
    CounterexampleCollection => counterexamples: Counterexample,
    EntityCollection => entities: Entity,
    EntityMentionCollection => examples: EntityMention,
    ValueCollection => values: Value,
    SynonymCollection => synonyms: Synonym,
    DialogNodeCollection => dialog_nodes: DialogNode,
    LogCollection => logs: Log,
}
