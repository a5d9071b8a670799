//! Assistant v1 service client.
//!
//! [`AssistantClient`] exposes one `async fn` per API operation. The shared
//! plumbing (URL and query building, authentication, status classification and
//! body decoding) lives in `core`; each resource family is a submodule adding
//! its operations as inherent methods.

pub mod builder;
pub mod callbacks;
pub mod core;
mod dialog_nodes;
mod endpoint;
mod entities;
mod intents;
mod logs;
mod message;
pub mod options;
pub mod pagination;
pub mod response;
mod workspaces;

pub use builder::AssistantClientBuilder;
pub use callbacks::{Callbacks, PendingOperation};
pub use core::AssistantClient;
pub use options::{
    GetOptions, GetWorkspaceOptions, ListOptions, LogListOptions, MessageOptions, UpdateOptions,
};
pub use pagination::{paginate, CursorOptions};
pub use response::{DetailedResponse, ResponseData};
