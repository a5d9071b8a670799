//! Message logs and user data deletion.

use crate::types::LogCollection;
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::LogListOptions;
use super::response::DetailedResponse;

impl AssistantClient {
    /// Logged `message` exchanges of one workspace.
    pub async fn list_logs(
        &self,
        workspace_id: &str,
        options: &LogListOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        const OP: &str = "list_logs";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id, "logs"]);
        self.execute(options.apply(endpoint)).await
    }

    /// Logged exchanges across the instance. `filter` must select a workspace,
    /// e.g. `language::en,request.context.metadata.deployment::prod`; it replaces
    /// any filter set in `options`.
    pub async fn list_all_logs(
        &self,
        filter: &str,
        options: &LogListOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        const OP: &str = "list_all_logs";
        let filter = require("filter", filter, OP)?;
        let options = options.clone().filter(filter);
        self.execute(options.apply(Endpoint::get(OP).path(["logs"])))
            .await
    }

    /// Delete every piece of data tagged with `customer_id` (the value of the
    /// `X-Watson-Metadata: customer_id=...` header used when it was sent).
    pub async fn delete_user_data(&self, customer_id: &str) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_user_data";
        let customer_id = require("customer_id", customer_id, OP)?;
        let endpoint = Endpoint::delete(OP)
            .path(["user_data"])
            .query("customer_id", customer_id);
        self.execute_empty(endpoint).await
    }
}
