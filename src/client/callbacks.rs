//! Continuation-style dispatch on top of the async API.
//!
//! [`AssistantClient::submit`] runs an operation on the tokio runtime and hands
//! its outcome to exactly one of two continuations. Both must be supplied; a
//! missing one is rejected before the operation is started.

use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{Error, ErrorContext, Result};

use super::core::AssistantClient;
use super::response::{DetailedResponse, ResponseData};

type SuccessFn<T> = Box<dyn FnOnce(T, ResponseData) + Send + 'static>;
type FailureFn = Box<dyn FnOnce(Error, ResponseData) + Send + 'static>;

/// Success and failure continuations of one submitted operation.
pub struct Callbacks<T> {
    on_success: Option<SuccessFn<T>>,
    on_failure: Option<FailureFn>,
}

impl<T> Callbacks<T> {
    pub fn new() -> Self {
        Self {
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_success(mut self, f: impl FnOnce(T, ResponseData) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Receives the error and whatever response data was received (default
    /// data when the request never got a response).
    pub fn on_failure(mut self, f: impl FnOnce(Error, ResponseData) + Send + 'static) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An operation in flight together with its continuations.
pub struct PendingOperation<T> {
    operation: &'static str,
    on_success: SuccessFn<T>,
    on_failure: FailureFn,
}

impl<T> PendingOperation<T> {
    /// Fails with [`Error::InvalidArgument`] unless both continuations are set.
    pub fn new(operation: &'static str, callbacks: Callbacks<T>) -> Result<Self> {
        let missing = |name: &str| {
            Error::invalid_argument_with_context(
                format!("{} continuation is required", name),
                ErrorContext::new()
                    .with_field_path(name)
                    .with_source(operation),
            )
        };
        Ok(Self {
            operation,
            on_success: callbacks.on_success.ok_or_else(|| missing("on_success"))?,
            on_failure: callbacks.on_failure.ok_or_else(|| missing("on_failure"))?,
        })
    }

    /// Deliver the outcome. Consumes the record, so it runs once.
    pub fn complete(self, outcome: Result<DetailedResponse<T>>) {
        match outcome {
            Ok(response) => {
                debug!(operation = self.operation, status = response.data.status, "delivering success");
                let (result, data) = response.into_parts();
                (self.on_success)(result, data);
            }
            Err(error) => {
                let data = error.response_data().cloned().unwrap_or_default();
                debug!(operation = self.operation, status = data.status, "delivering failure");
                (self.on_failure)(error, data);
            }
        }
    }
}

impl AssistantClient {
    /// Run `op` in the background and report through `callbacks`.
    ///
    /// ```no_run
    /// # use watson_assistant::client::{AssistantClient, Callbacks, ListOptions};
    /// # async fn demo(client: AssistantClient) -> watson_assistant::Result<()> {
    /// let callbacks = Callbacks::new()
    ///     .on_success(|workspaces: watson_assistant::types::WorkspaceCollection, _| {
    ///         println!("{} workspaces", workspaces.workspaces.len());
    ///     })
    ///     .on_failure(|err, data| eprintln!("failed ({}): {}", data.status, err));
    /// client.submit("list_workspaces", callbacks, |c| async move {
    ///     c.list_workspaces(&ListOptions::default()).await
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Must be called from within a tokio runtime. Returns an error without
    /// calling `op` when a continuation is missing. A panic inside the operation
    /// is reported to the failure continuation as [`Error::Runtime`].
    pub fn submit<T, F, Fut>(
        &self,
        operation: &'static str,
        callbacks: Callbacks<T>,
        op: F,
    ) -> Result<JoinHandle<()>>
    where
        T: Send + 'static,
        F: FnOnce(AssistantClient) -> Fut,
        Fut: Future<Output = Result<DetailedResponse<T>>> + Send + 'static,
    {
        let pending = PendingOperation::new(operation, callbacks)?;
        let fut = op(self.clone());
        Ok(tokio::spawn(async move {
            let outcome = match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(panic) => Err(panicked(operation, panic)),
            };
            pending.complete(outcome)
        }))
    }
}

fn panicked(operation: &'static str, panic: Box<dyn Any + Send>) -> Error {
    let reason = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    warn!(operation, reason = %reason, "operation panicked");
    Error::runtime_with_context(
        "operation panicked",
        ErrorContext::new()
            .with_details(reason)
            .with_source(operation),
    )
}
