use crate::types::{CreateDialogNode, DialogNode, DialogNodeCollection, UpdateDialogNode};
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::ListOptions;
use super::response::DetailedResponse;

impl AssistantClient {
    pub async fn list_dialog_nodes(
        &self,
        workspace_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<DialogNodeCollection>> {
        const OP: &str = "list_dialog_nodes";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id, "dialog_nodes"]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_dialog_node(
        &self,
        workspace_id: &str,
        node: &CreateDialogNode,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<DialogNode>> {
        const OP: &str = "create_dialog_node";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        require("dialog_node", &node.dialog_node, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "dialog_nodes"])
            .query_opt("include_audit", include_audit)
            .json(node)?;
        self.execute(endpoint).await
    }

    pub async fn get_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: &str,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<DialogNode>> {
        const OP: &str = "get_dialog_node";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let dialog_node = require("dialog_node", dialog_node, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "dialog_nodes", dialog_node])
            .query_opt("include_audit", include_audit);
        self.execute(endpoint).await
    }

    pub async fn update_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: &str,
        update: &UpdateDialogNode,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<DialogNode>> {
        const OP: &str = "update_dialog_node";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let dialog_node = require("dialog_node", dialog_node, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "dialog_nodes", dialog_node])
            .query_opt("include_audit", include_audit)
            .json(update)?;
        self.execute(endpoint).await
    }

    pub async fn delete_dialog_node(
        &self,
        workspace_id: &str,
        dialog_node: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_dialog_node";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let dialog_node = require("dialog_node", dialog_node, OP)?;
        self.execute_empty(
            Endpoint::delete(OP).path(["workspaces", workspace_id, "dialog_nodes", dialog_node]),
        )
        .await
    }
}
