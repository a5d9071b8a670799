//! Conversation Example
//!
//! Runs a short scripted conversation against a workspace, carrying the context
//! from each reply into the next turn.
//!
//! Requires `ASSISTANT_VERSION`, credentials (`ASSISTANT_APIKEY` or the keyring)
//! and `ASSISTANT_WORKSPACE_ID`.

use watson_assistant::types::{MessageRequest, RuntimeResponseGeneric};
use watson_assistant::AssistantClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("watson_assistant=debug")
        .init();

    let workspace_id = std::env::var("ASSISTANT_WORKSPACE_ID")?;
    let client = AssistantClient::from_env()?;

    let turns = ["Hello", "I'd like a large pizza", "pepperoni please"];
    let mut request = MessageRequest::text(turns[0]);

    for (i, turn) in turns.iter().enumerate() {
        println!("> {}", turn);
        let reply = client.message(&workspace_id, &request).await?;

        for item in reply.result.output.generic.iter().flatten() {
            match item {
                RuntimeResponseGeneric::Text(t) => println!("< {}", t.text),
                RuntimeResponseGeneric::Option(list) => {
                    println!("< {}", list.title);
                    for opt in &list.options {
                        println!("    - {}", opt.label);
                    }
                }
                RuntimeResponseGeneric::Pause(p) => println!("  (pause {} ms)", p.time),
                other => println!("  [{}]", other.response_type()),
            }
        }

        if let Some(next) = turns.get(i + 1) {
            request = MessageRequest::follow_up(&reply.result, *next);
        }
    }

    Ok(())
}
