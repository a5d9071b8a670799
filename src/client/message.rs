use crate::types::{MessageRequest, MessageResponse};
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::MessageOptions;
use super::response::DetailedResponse;

impl AssistantClient {
    /// Send one conversational turn to a workspace.
    ///
    /// Pass the previous response's context back in `request` to continue a
    /// conversation (see [`MessageRequest::follow_up`]).
    pub async fn message(
        &self,
        workspace_id: &str,
        request: &MessageRequest,
    ) -> Result<DetailedResponse<MessageResponse>> {
        self.message_with_options(workspace_id, request, &MessageOptions::default())
            .await
    }

    pub async fn message_with_options(
        &self,
        workspace_id: &str,
        request: &MessageRequest,
        options: &MessageOptions,
    ) -> Result<DetailedResponse<MessageResponse>> {
        const OP: &str = "message";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "message"])
            .json(request)?;
        self.execute(options.apply(endpoint)).await
    }
}
