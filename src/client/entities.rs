//! Entities, their values and synonyms, and entity mentions.

use crate::types::validate::{check_name, NameKind};
use crate::types::{
    CreateEntity, CreateSynonym, CreateValue, Entity, EntityCollection, EntityMentionCollection,
    Synonym, SynonymCollection, UpdateEntity, UpdateSynonym, UpdateValue, Value, ValueCollection,
};
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::{GetOptions, ListOptions, UpdateOptions};
use super::response::DetailedResponse;

impl AssistantClient {
    /// List entities. With `export`, each entity includes its values.
    pub async fn list_entities(
        &self,
        workspace_id: &str,
        export: Option<bool>,
        options: &ListOptions,
    ) -> Result<DetailedResponse<EntityCollection>> {
        const OP: &str = "list_entities";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "entities"])
            .query_opt("export", export);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_entity(
        &self,
        workspace_id: &str,
        entity: &CreateEntity,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Entity>> {
        const OP: &str = "create_entity";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        check_name(NameKind::Entity, &entity.entity, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "entities"])
            .query_opt("include_audit", include_audit)
            .json(entity)?;
        self.execute(endpoint).await
    }

    pub async fn get_entity(
        &self,
        workspace_id: &str,
        entity: &str,
        options: &GetOptions,
    ) -> Result<DetailedResponse<Entity>> {
        const OP: &str = "get_entity";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id, "entities", entity]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn update_entity(
        &self,
        workspace_id: &str,
        entity: &str,
        update: &UpdateEntity,
        options: &UpdateOptions,
    ) -> Result<DetailedResponse<Entity>> {
        const OP: &str = "update_entity";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        if let Some(new_name) = &update.entity {
            check_name(NameKind::Entity, new_name, OP)?;
        }
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "entities", entity])
            .json(update)?;
        self.execute(options.apply(endpoint)).await
    }

    pub async fn delete_entity(
        &self,
        workspace_id: &str,
        entity: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_entity";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        self.execute_empty(Endpoint::delete(OP).path(["workspaces", workspace_id, "entities", entity]))
            .await
    }

    /// Intent examples that annotate `entity`.
    pub async fn list_mentions(
        &self,
        workspace_id: &str,
        entity: &str,
        options: &GetOptions,
    ) -> Result<DetailedResponse<EntityMentionCollection>> {
        const OP: &str = "list_mentions";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let endpoint =
            Endpoint::get(OP).path(["workspaces", workspace_id, "entities", entity, "mentions"]);
        self.execute(options.apply(endpoint)).await
    }

    /// List values. With `export`, each value includes its synonyms or patterns.
    pub async fn list_values(
        &self,
        workspace_id: &str,
        entity: &str,
        export: Option<bool>,
        options: &ListOptions,
    ) -> Result<DetailedResponse<ValueCollection>> {
        const OP: &str = "list_values";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "entities", entity, "values"])
            .query_opt("export", export);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &CreateValue,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Value>> {
        const OP: &str = "create_value";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        require("value", &value.value, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "entities", entity, "values"])
            .query_opt("include_audit", include_audit)
            .json(value)?;
        self.execute(endpoint).await
    }

    pub async fn get_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        options: &GetOptions,
    ) -> Result<DetailedResponse<Value>> {
        const OP: &str = "get_value";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let endpoint =
            Endpoint::get(OP).path(["workspaces", workspace_id, "entities", entity, "values", value]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn update_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        update: &UpdateValue,
        options: &UpdateOptions,
    ) -> Result<DetailedResponse<Value>> {
        const OP: &str = "update_value";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "entities", entity, "values", value])
            .json(update)?;
        self.execute(options.apply(endpoint)).await
    }

    pub async fn delete_value(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_value";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        self.execute_empty(
            Endpoint::delete(OP).path(["workspaces", workspace_id, "entities", entity, "values", value]),
        )
        .await
    }

    pub async fn list_synonyms(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<SynonymCollection>> {
        const OP: &str = "list_synonyms";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let endpoint = Endpoint::get(OP).path(synonym_path(workspace_id, entity, value, None));
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &CreateSynonym,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Synonym>> {
        const OP: &str = "create_synonym";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        require("synonym", &synonym.synonym, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(synonym_path(workspace_id, entity, value, None))
            .query_opt("include_audit", include_audit)
            .json(synonym)?;
        self.execute(endpoint).await
    }

    pub async fn get_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Synonym>> {
        const OP: &str = "get_synonym";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let synonym = require("synonym", synonym, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(synonym_path(workspace_id, entity, value, Some(synonym)))
            .query_opt("include_audit", include_audit);
        self.execute(endpoint).await
    }

    pub async fn update_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
        update: &UpdateSynonym,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Synonym>> {
        const OP: &str = "update_synonym";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let synonym = require("synonym", synonym, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(synonym_path(workspace_id, entity, value, Some(synonym)))
            .query_opt("include_audit", include_audit)
            .json(update)?;
        self.execute(endpoint).await
    }

    pub async fn delete_synonym(
        &self,
        workspace_id: &str,
        entity: &str,
        value: &str,
        synonym: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_synonym";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let entity = require("entity", entity, OP)?;
        let value = require("value", value, OP)?;
        let synonym = require("synonym", synonym, OP)?;
        self.execute_empty(
            Endpoint::delete(OP).path(synonym_path(workspace_id, entity, value, Some(synonym))),
        )
        .await
    }
}

fn synonym_path<'a>(
    workspace_id: &'a str,
    entity: &'a str,
    value: &'a str,
    synonym: Option<&'a str>,
) -> Vec<&'a str> {
    let mut path = vec![
        "workspaces",
        workspace_id,
        "entities",
        entity,
        "values",
        value,
        "synonyms",
    ];
    path.extend(synonym);
    path
}
