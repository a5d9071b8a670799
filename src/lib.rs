//! # watson-assistant
//!
//! Typed async client for the Watson Assistant v1 REST API.
//!
//! ## Overview
//!
//! Every API operation is an `async fn` on [`AssistantClient`] that builds the
//! request from typed inputs, hands it to a [`transport::Transport`], and maps the
//! reply to a typed model inside a [`DetailedResponse`] or to one [`Error`].
//!
//! - **Typed models**: request and response types are kept apart; server-assigned
//!   fields are read-only on the response side
//! - **Open unions**: response items with an unrecognized `response_type` are
//!   preserved as [`types::UnknownGeneric`] instead of failing the whole response
//! - **One failure shape**: non-2xx statuses, undecodable bodies and transport
//!   failures all surface as [`Error`], with the raw response attached
//! - **Pluggable transport**: `reqwest` by default, any [`transport::Transport`]
//!   for tests or custom stacks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use watson_assistant::{AssistantClientBuilder, Authenticator};
//! use watson_assistant::types::MessageRequest;
//!
//! #[tokio::main]
//! async fn main() -> watson_assistant::Result<()> {
//!     let client = AssistantClientBuilder::new()
//!         .version("2021-06-14")
//!         .authenticator(Authenticator::api_key("your-api-key"))
//!         .build()?;
//!
//!     let reply = client
//!         .message("workspace-id", &MessageRequest::text("Hello"))
//!         .await?;
//!     for text in reply.result.texts() {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, operations and callback dispatch |
//! | [`types`] | API models |
//! | [`auth`] | Authenticators and service credentials |
//! | [`config`] | YAML and environment configuration |
//! | [`transport`] | Transport seam and the `reqwest` implementation |
//! | [`error_code`] | Status classification |

pub mod auth;
pub mod client;
pub mod config;
pub mod error_code;
pub mod transport;
pub mod types;

pub use auth::{Authenticator, Credentials};
pub use client::{
    AssistantClient, AssistantClientBuilder, Callbacks, DetailedResponse, ListOptions,
    ResponseData,
};
pub use config::AssistantConfig;
pub use error_code::StandardErrorCode;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
