use crate::types::validate::{check_name, NameKind};
use crate::types::{CreateWorkspace, UpdateWorkspace, Workspace, WorkspaceCollection};
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::{GetWorkspaceOptions, ListOptions, UpdateOptions};
use super::response::DetailedResponse;

impl AssistantClient {
    pub async fn list_workspaces(
        &self,
        options: &ListOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        let endpoint = Endpoint::get("list_workspaces").path(["workspaces"]);
        self.execute(options.apply(endpoint)).await
    }

    /// Create a workspace, optionally with its intents, entities and dialog in one body.
    ///
    /// Nested intent and entity names are checked before anything is sent.
    pub async fn create_workspace(
        &self,
        workspace: &CreateWorkspace,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Workspace>> {
        const OP: &str = "create_workspace";
        check_nested_names(workspace, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces"])
            .query_opt("include_audit", include_audit)
            .json(workspace)?;
        self.execute(endpoint).await
    }

    pub async fn get_workspace(
        &self,
        workspace_id: &str,
        options: &GetWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        const OP: &str = "get_workspace";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id]);
        self.execute(options.apply(endpoint)).await
    }

    /// Update a workspace. Without `append`, nested lists in `workspace` replace
    /// the existing ones.
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        workspace: &UpdateWorkspace,
        options: &UpdateOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        const OP: &str = "update_workspace";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        check_nested_names(workspace, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id])
            .json(workspace)?;
        self.execute(options.apply(endpoint)).await
    }

    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_workspace";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        self.execute_empty(Endpoint::delete(OP).path(["workspaces", workspace_id]))
            .await
    }
}

fn check_nested_names(workspace: &CreateWorkspace, operation: &str) -> Result<()> {
    for intent in workspace.intents.iter().flatten() {
        check_name(NameKind::Intent, &intent.intent, operation)?;
    }
    for entity in workspace.entities.iter().flatten() {
        check_name(NameKind::Entity, &entity.entity, operation)?;
    }
    Ok(())
}
