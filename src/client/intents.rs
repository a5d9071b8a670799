//! Intents, their examples, and workspace counterexamples.

use crate::types::validate::{check_name, NameKind};
use crate::types::{
    Counterexample, CounterexampleCollection, CreateCounterexample, CreateExample, CreateIntent,
    Example, ExampleCollection, Intent, IntentCollection, UpdateCounterexample, UpdateExample,
    UpdateIntent,
};
use crate::Result;

use super::core::{require, AssistantClient};
use super::endpoint::Endpoint;
use super::options::{GetOptions, ListOptions, UpdateOptions};
use super::response::DetailedResponse;

impl AssistantClient {
    /// List intents. With `export`, each intent includes its examples.
    pub async fn list_intents(
        &self,
        workspace_id: &str,
        export: Option<bool>,
        options: &ListOptions,
    ) -> Result<DetailedResponse<IntentCollection>> {
        const OP: &str = "list_intents";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "intents"])
            .query_opt("export", export);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_intent(
        &self,
        workspace_id: &str,
        intent: &CreateIntent,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Intent>> {
        const OP: &str = "create_intent";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        check_name(NameKind::Intent, &intent.intent, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "intents"])
            .query_opt("include_audit", include_audit)
            .json(intent)?;
        self.execute(endpoint).await
    }

    pub async fn get_intent(
        &self,
        workspace_id: &str,
        intent: &str,
        options: &GetOptions,
    ) -> Result<DetailedResponse<Intent>> {
        const OP: &str = "get_intent";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id, "intents", intent]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn update_intent(
        &self,
        workspace_id: &str,
        intent: &str,
        update: &UpdateIntent,
        options: &UpdateOptions,
    ) -> Result<DetailedResponse<Intent>> {
        const OP: &str = "update_intent";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        if let Some(new_name) = &update.intent {
            check_name(NameKind::Intent, new_name, OP)?;
        }
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "intents", intent])
            .json(update)?;
        self.execute(options.apply(endpoint)).await
    }

    pub async fn delete_intent(
        &self,
        workspace_id: &str,
        intent: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_intent";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        self.execute_empty(Endpoint::delete(OP).path(["workspaces", workspace_id, "intents", intent]))
            .await
    }

    pub async fn list_examples(
        &self,
        workspace_id: &str,
        intent: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<ExampleCollection>> {
        const OP: &str = "list_examples";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        let endpoint =
            Endpoint::get(OP).path(["workspaces", workspace_id, "intents", intent, "examples"]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_example(
        &self,
        workspace_id: &str,
        intent: &str,
        example: &CreateExample,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Example>> {
        const OP: &str = "create_example";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        require("text", &example.text, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "intents", intent, "examples"])
            .query_opt("include_audit", include_audit)
            .json(example)?;
        self.execute(endpoint).await
    }

    /// Examples are addressed by their text.
    pub async fn get_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Example>> {
        const OP: &str = "get_example";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        let text = require("text", text, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "intents", intent, "examples", text])
            .query_opt("include_audit", include_audit);
        self.execute(endpoint).await
    }

    pub async fn update_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
        update: &UpdateExample,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Example>> {
        const OP: &str = "update_example";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        let text = require("text", text, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "intents", intent, "examples", text])
            .query_opt("include_audit", include_audit)
            .json(update)?;
        self.execute(endpoint).await
    }

    pub async fn delete_example(
        &self,
        workspace_id: &str,
        intent: &str,
        text: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_example";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let intent = require("intent", intent, OP)?;
        let text = require("text", text, OP)?;
        self.execute_empty(
            Endpoint::delete(OP).path(["workspaces", workspace_id, "intents", intent, "examples", text]),
        )
        .await
    }

    pub async fn list_counterexamples(
        &self,
        workspace_id: &str,
        options: &ListOptions,
    ) -> Result<DetailedResponse<CounterexampleCollection>> {
        const OP: &str = "list_counterexamples";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let endpoint = Endpoint::get(OP).path(["workspaces", workspace_id, "counterexamples"]);
        self.execute(options.apply(endpoint)).await
    }

    pub async fn create_counterexample(
        &self,
        workspace_id: &str,
        counterexample: &CreateCounterexample,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Counterexample>> {
        const OP: &str = "create_counterexample";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        require("text", &counterexample.text, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "counterexamples"])
            .query_opt("include_audit", include_audit)
            .json(counterexample)?;
        self.execute(endpoint).await
    }

    pub async fn get_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Counterexample>> {
        const OP: &str = "get_counterexample";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let text = require("text", text, OP)?;
        let endpoint = Endpoint::get(OP)
            .path(["workspaces", workspace_id, "counterexamples", text])
            .query_opt("include_audit", include_audit);
        self.execute(endpoint).await
    }

    pub async fn update_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
        update: &UpdateCounterexample,
        include_audit: Option<bool>,
    ) -> Result<DetailedResponse<Counterexample>> {
        const OP: &str = "update_counterexample";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let text = require("text", text, OP)?;
        let endpoint = Endpoint::post(OP)
            .path(["workspaces", workspace_id, "counterexamples", text])
            .query_opt("include_audit", include_audit)
            .json(update)?;
        self.execute(endpoint).await
    }

    pub async fn delete_counterexample(
        &self,
        workspace_id: &str,
        text: &str,
    ) -> Result<DetailedResponse<()>> {
        const OP: &str = "delete_counterexample";
        let workspace_id = require("workspace_id", workspace_id, OP)?;
        let text = require("text", text, OP)?;
        self.execute_empty(Endpoint::delete(OP).path(["workspaces", workspace_id, "counterexamples", text]))
            .await
    }
}
