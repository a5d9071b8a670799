//! assistant-cli: small command-line front end for the Assistant v1 API
//!
//! Usage:
//!   assistant-cli list-workspaces [--limit <n>]      List workspaces
//!   assistant-cli message <workspace_id> <text>...   Send one message
//!   assistant-cli delete-user-data <customer_id>     Delete data tagged with a customer id
//!   assistant-cli version                            Show version information

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use watson_assistant::client::{paginate, ListOptions};
use watson_assistant::types::{MessageRequest, Paginated, WorkspaceCollection};
use watson_assistant::{AssistantClient, AssistantClientBuilder, AssistantConfig};

use futures::TryStreamExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "list-workspaces" => cmd_list_workspaces(&args[2..]).await,
        "message" => cmd_message(&args[2..]).await,
        "delete-user-data" => cmd_delete_user_data(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"assistant-cli: Watson Assistant v1 command-line tool

USAGE:
    assistant-cli <COMMAND> [OPTIONS]

COMMANDS:
    list-workspaces [--limit <n>]       List workspaces (all pages)
    message <workspace_id> <text>...    Send one message and print the reply
    delete-user-data <customer_id>      Delete data tagged with a customer id
    version                             Show version information
    help                                Show this help message

OPTIONS:
    --config <path>                     YAML configuration file

ENVIRONMENT:
    ASSISTANT_URL                       Service instance URL
    ASSISTANT_VERSION                   API version date (required)
    ASSISTANT_APIKEY                    API key
    RUST_LOG                            Log filter, e.g. watson_assistant=debug"#
    );
}

fn cmd_version() {
    println!("assistant-cli {}", env!("CARGO_PKG_VERSION"));
}

/// Value following `flag`, removing both from `args`.
fn take_flag(args: &mut Vec<String>, flag: &str) -> Result<Option<String>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => {
            if i + 1 >= args.len() {
                bail!("{flag} needs a value");
            }
            let value = args.remove(i + 1);
            args.remove(i);
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

async fn client(args: &mut Vec<String>) -> Result<AssistantClient> {
    let config = match take_flag(args, "--config")? {
        Some(path) => AssistantConfig::from_yaml_file(&path)
            .await
            .with_context(|| format!("loading {path}"))?,
        None => AssistantConfig::from_env(),
    };
    AssistantClientBuilder::from_config(&config)
        .build()
        .context("building client")
}

async fn cmd_list_workspaces(args: &[String]) -> Result<()> {
    let mut args = args.to_vec();
    let client = client(&mut args).await?;
    let limit = take_flag(&mut args, "--limit")?
        .map(|v| v.parse::<i64>())
        .transpose()
        .context("--limit must be a number")?;

    let mut options = ListOptions::new();
    if let Some(limit) = limit {
        options = options.page_limit(limit);
    }

    let pages: Vec<WorkspaceCollection> = paginate(options, |opts| {
        let client = client.clone();
        async move { client.list_workspaces(&opts).await }
    })
    .try_collect()
    .await?;

    for workspace in pages.into_iter().flat_map(Paginated::into_items) {
        println!(
            "{}\t{}\t{}",
            workspace.workspace_id().unwrap_or("-"),
            workspace.status().unwrap_or("-"),
            workspace.name
        );
    }
    Ok(())
}

async fn cmd_message(args: &[String]) -> Result<()> {
    let mut args = args.to_vec();
    let client = client(&mut args).await?;
    if args.len() < 2 {
        bail!("usage: assistant-cli message <workspace_id> <text>...");
    }
    let workspace_id = args.remove(0);
    let text = args.join(" ");

    let reply = client
        .message(&workspace_id, &MessageRequest::text(text))
        .await?
        .into_result();

    if let Some(intent) = reply.top_intent() {
        eprintln!("intent: {} ({:.2})", intent.intent, intent.confidence);
    }
    for line in reply.texts() {
        println!("{line}");
    }
    Ok(())
}

async fn cmd_delete_user_data(args: &[String]) -> Result<()> {
    let mut args = args.to_vec();
    let client = client(&mut args).await?;
    let Some(customer_id) = args.first() else {
        bail!("usage: assistant-cli delete-user-data <customer_id>");
    };
    let response = client.delete_user_data(customer_id).await?;
    println!("accepted (HTTP {})", response.status());
    Ok(())
}
