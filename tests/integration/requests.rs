use watson_assistant::client::{GetOptions, LogListOptions, UpdateOptions};
use watson_assistant::types::{CreateSynonym, CreateValue, UpdateValue};
use watson_assistant::ListOptions;

use super::mock_server::VERSION;
use super::spy_transport::{client_with, SpyTransport};

#[tokio::test]
async fn test_version_on_every_request() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    client.list_workspaces(&ListOptions::default()).await.unwrap();
    assert_eq!(spy.last().query_param("version").as_deref(), Some(VERSION));

    client.delete_intent("w1", "hello").await.unwrap();
    assert_eq!(spy.last().query_param("version").as_deref(), Some(VERSION));

    client.delete_user_data("cust-1").await.unwrap();
    let sent = spy.last();
    assert_eq!(sent.query_param("version").as_deref(), Some(VERSION));
    assert_eq!(sent.query_param("customer_id").as_deref(), Some("cust-1"));
    assert_eq!(sent.url.path(), "/instances/i-1/v1/user_data");
}

#[tokio::test]
async fn test_unset_options_are_not_sent() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    client
        .list_intents("w1", None, &ListOptions::default())
        .await
        .unwrap();
    let sent = spy.last();
    let keys: Vec<String> = sent.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["version"]);

    client
        .list_intents(
            "w1",
            Some(true),
            &ListOptions::new().sort("-updated").cursor("abc"),
        )
        .await
        .unwrap();
    let sent = spy.last();
    assert_eq!(sent.query_param("export").as_deref(), Some("true"));
    assert_eq!(sent.query_param("sort").as_deref(), Some("-updated"));
    assert_eq!(sent.query_param("cursor").as_deref(), Some("abc"));
    assert_eq!(sent.query_param("page_limit"), None);
    assert_eq!(sent.query_param("include_audit"), None);
}

#[tokio::test]
async fn test_path_parameters_are_single_segments() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let _ = client
        .get_example("w1", "order", "pizza / pasta?", None)
        .await;
    assert_eq!(
        spy.last().url.path(),
        "/instances/i-1/v1/workspaces/w1/intents/order/examples/pizza%20%2F%20pasta%3F"
    );

    client
        .delete_synonym("w1", "topping", "green pepper", "capsicum#1")
        .await
        .unwrap();
    assert_eq!(
        spy.last().url.path(),
        "/instances/i-1/v1/workspaces/w1/entities/topping/values/green%20pepper/synonyms/capsicum%231"
    );
}

#[tokio::test]
async fn test_authorization_and_content_headers() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let _ = client
        .create_synonym("w1", "topping", "pepperoni", &CreateSynonym::new("peperoni"), None)
        .await;
    let sent = spy.last();
    assert_eq!(
        sent.headers.get("authorization").unwrap().to_str().unwrap(),
        "Basic YXBpa2V5OnRlc3Qta2V5"
    );
    assert_eq!(sent.headers.get("content-type").unwrap(), "application/json");
    assert_eq!(sent.headers.get("accept").unwrap(), "application/json");

    let _ = client.get_value("w1", "topping", "pepperoni", &GetOptions::export()).await;
    let sent = spy.last();
    assert!(sent.headers.get("content-type").is_none());
    assert!(sent.body.is_none());
    assert_eq!(sent.query_param("export").as_deref(), Some("true"));
}

#[tokio::test]
async fn test_value_bodies() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let _ = client
        .create_value(
            "w1",
            "phone",
            &CreateValue::patterns("us", [r"\d{3}-\d{4}"]),
            Some(true),
        )
        .await;
    let sent = spy.last();
    assert_eq!(
        sent.json_body().unwrap(),
        serde_json::json!({"value": "us", "type": "patterns", "patterns": [r"\d{3}-\d{4}"]})
    );
    assert_eq!(sent.query_param("include_audit").as_deref(), Some("true"));

    let update = UpdateValue {
        synonyms: Some(vec!["cell".into()]),
        ..UpdateValue::default()
    };
    let _ = client
        .update_value("w1", "phone", "mobile", &update, &UpdateOptions::append())
        .await;
    let sent = spy.last();
    assert_eq!(sent.json_body().unwrap(), serde_json::json!({"synonyms": ["cell"]}));
    assert_eq!(sent.query_param("append").as_deref(), Some("true"));
}

#[tokio::test]
async fn test_list_all_logs_filter() {
    let spy = SpyTransport::replying(
        200,
        r#"{"logs":[{"log_id":"l1","request":{"input":{"text":"hi"}},"response":{"output":{"text":["hello"]}},"workspace_id":"w1"}],"pagination":{"next_cursor":"n2"}}"#,
    );
    let client = client_with(spy.clone());

    let logs = client
        .list_all_logs(
            "workspace_id::w1",
            &LogListOptions::new().filter("ignored").page_limit(1),
        )
        .await
        .unwrap()
        .into_result();

    let sent = spy.last();
    assert_eq!(sent.url.path(), "/instances/i-1/v1/logs");
    assert_eq!(sent.query_param("filter").as_deref(), Some("workspace_id::w1"));
    assert_eq!(sent.query_param("page_limit").as_deref(), Some("1"));
    assert_eq!(logs.logs[0].log_id(), "l1");
    assert_eq!(logs.pagination.next_cursor.as_deref(), Some("n2"));
}
