//! Typed request and response models of the Assistant v1 API.
//!
//! Response models keep server-assigned fields (ids, status, timestamps)
//! private behind getters. Request bodies are separate `Create*`/`Update*`
//! types whose unset fields are omitted from the JSON.
//!
//! Fields the API documents as open string sets (`type`, `status`,
//! `response_type`, ...) are plain `String`s; the documented values are
//! exposed as constants in small modules such as [`value_type`] or
//! [`node_type`].
//!
//! ```rust
//! use watson_assistant::types::{CreateEntity, CreateValue};
//!
//! let entity = CreateEntity::new("topping")
//!     .with_value(CreateValue::synonyms("pepperoni", ["peperoni"]));
//! let body = serde_json::to_value(&entity).unwrap();
//! assert_eq!(body["values"][0]["type"], "synonyms");
//! ```

pub mod common;
pub mod dialog_node;
pub mod entity;
pub mod generic;
pub mod intent;
pub mod log;
pub mod message;
pub mod validate;
pub mod workspace;

pub use common::{
    CounterexampleCollection, DialogNodeCollection, EntityCollection, EntityMentionCollection,
    ExampleCollection, IntentCollection, JsonMap, LogCollection, LogPagination, Paginated,
    Pagination, SynonymCollection, ValueCollection, WorkspaceCollection,
};
pub use dialog_node::{
    node_type, CreateDialogNode, DialogNode, DialogNodeAction, DialogNodeNextStep,
    DialogNodeOutput, DialogNodeOutputModifiers, UpdateDialogNode,
};
pub use entity::{
    value_type, CreateEntity, CreateSynonym, CreateValue, Entity, EntityMention, Synonym,
    UpdateEntity, UpdateSynonym, UpdateValue, Value,
};
pub use generic::{response_type, DialogNodeOutputGeneric, RuntimeResponseGeneric, UnknownGeneric};
pub use intent::{
    Counterexample, CreateCounterexample, CreateExample, CreateIntent, Example, Intent, Mention,
    UpdateCounterexample, UpdateExample, UpdateIntent,
};
pub use log::Log;
pub use message::{
    Context, MessageInput, MessageRequest, MessageResponse, OutputData, RuntimeEntity,
    RuntimeIntent,
};
pub use workspace::{workspace_status, CreateWorkspace, UpdateWorkspace, Workspace};
