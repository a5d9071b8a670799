//! Workspace Lifecycle Example
//!
//! Creates a small workspace in one request, edits it through the per-resource
//! operations, lists what it contains, and deletes it again.

use watson_assistant::client::{callbacks::Callbacks, GetWorkspaceOptions, UpdateOptions};
use watson_assistant::types::{
    node_type, CreateDialogNode, CreateEntity, CreateExample, CreateIntent, CreateValue,
    CreateWorkspace, DialogNodeOutput, DialogNodeOutputGeneric, UpdateIntent,
};
use watson_assistant::{AssistantClient, ListOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("watson_assistant=info")
        .init();

    let client = AssistantClient::from_env()?;

    let draft = CreateWorkspace::new("Pizza demo")
        .with_language("en")
        .with_description("Created by the workspace_lifecycle demo")
        .with_intent(CreateIntent::new("order_pizza").with_examples([
            "I want a pizza",
            "Can I order a pizza",
        ]))
        .with_entity(
            CreateEntity::new("size")
                .with_value(CreateValue::synonyms("large", ["big", "family size"]))
                .with_value(CreateValue::synonyms("small", ["little"])),
        )
        .with_dialog_node(
            CreateDialogNode::new("welcome")
                .with_conditions("welcome")
                .with_node_type(node_type::STANDARD)
                .with_output(DialogNodeOutput::generic(vec![DialogNodeOutputGeneric::text([
                    "Welcome to the pizza shop!",
                ])])),
        )
        .with_counterexample("What's the weather like?");

    let created = client.create_workspace(&draft, None).await?;
    let workspace_id = created
        .result
        .workspace_id()
        .ok_or("service returned no workspace id")?
        .to_string();
    println!("created {} (HTTP {})", workspace_id, created.status());

    client
        .create_example(
            &workspace_id,
            "order_pizza",
            &CreateExample::new("a large pizza please"),
            None,
        )
        .await?;
    client
        .update_intent(
            &workspace_id,
            "order_pizza",
            &UpdateIntent {
                description: Some("Customer wants to order".into()),
                ..UpdateIntent::default()
            },
            &UpdateOptions::default(),
        )
        .await?;

    let intents = client
        .list_intents(&workspace_id, Some(true), &ListOptions::new().include_count(true))
        .await?
        .into_result();
    for intent in &intents.intents {
        println!("intent {}: {:?}", intent.intent, intent.example_texts());
    }

    let exported = client
        .get_workspace(&workspace_id, &GetWorkspaceOptions::export())
        .await?
        .into_result();
    println!(
        "workspace {} has {} dialog node(s), status {:?}",
        exported.name,
        exported.dialog_nodes.as_ref().map_or(0, Vec::len),
        exported.status()
    );

    // Delete through the callback layer.
    let callbacks = Callbacks::new()
        .on_success(|_: (), data| println!("deleted (HTTP {})", data.status))
        .on_failure(|err, data| eprintln!("delete failed (HTTP {}): {}", data.status, err));
    let id = workspace_id.clone();
    client
        .submit("delete_workspace", callbacks, move |c| async move {
            c.delete_workspace(&id).await
        })?
        .await?;

    Ok(())
}
