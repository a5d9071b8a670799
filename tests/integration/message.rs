use serde_json::json;
use watson_assistant::client::MessageOptions;
use watson_assistant::types::{MessageRequest, RuntimeResponseGeneric};

use super::spy_transport::{client_with, SpyTransport};

const REPLY: &str = r#"{
    "input": {"text": "I want a pizza"},
    "intents": [{"intent": "order_pizza", "confidence": 0.97}],
    "entities": [{"entity": "size", "location": [9, 14], "value": "large", "confidence": 1}],
    "context": {"conversation_id": "c-42", "system": {"dialog_turn_counter": 1}, "pizza_size": "large"},
    "output": {
        "generic": [
            {"response_type": "text", "text": "What toppings?"},
            {"response_type": "holographic_card", "hologram": {"id": 7}},
            {"response_type": "option", "title": "Crust", "options": [{"label": "Thin", "value": {"input": {"text": "thin"}}}]}
        ],
        "text": ["What toppings?"],
        "nodes_visited": ["order"]
    }
}"#;

#[tokio::test]
async fn test_message_body_is_only_input() {
    let spy = SpyTransport::replying(200, REPLY);
    let client = client_with(spy.clone());

    let response = client
        .message("w1", &MessageRequest::text("I want a pizza"))
        .await
        .unwrap();

    let sent = spy.last();
    assert_eq!(sent.method, reqwest::Method::POST);
    assert_eq!(sent.url.path(), "/instances/i-1/v1/workspaces/w1/message");
    assert_eq!(sent.json_body(), Some(json!({"input": {"text": "I want a pizza"}})));
    assert_eq!(sent.query_param("nodes_visited_details"), None);

    let result = response.result;
    assert_eq!(result.top_intent().unwrap().intent, "order_pizza");
    assert_eq!(result.entities[0].value, "large");
    assert_eq!(result.conversation_id(), Some("c-42"));
    assert_eq!(result.texts(), vec!["What toppings?"]);
}

#[tokio::test]
async fn test_unknown_response_type_is_preserved() {
    let spy = SpyTransport::replying(200, REPLY);
    let client = client_with(spy);

    let result = client
        .message("w1", &MessageRequest::text("I want a pizza"))
        .await
        .unwrap()
        .into_result();

    let generic = result.output.generic.as_ref().unwrap();
    assert_eq!(generic.len(), 3);
    match &generic[1] {
        RuntimeResponseGeneric::Unknown(unknown) => {
            assert_eq!(unknown.response_type.as_deref(), Some("holographic_card"));
            assert_eq!(unknown.fields["hologram"], json!({"id": 7}));
        }
        other => panic!("expected unknown item, got {:?}", other),
    }
    assert!(matches!(generic[2], RuntimeResponseGeneric::Option(_)));
}

#[tokio::test]
async fn test_follow_up_sends_context_back() {
    let spy = SpyTransport::replying(200, REPLY);
    spy.push_reply(200, r#"{"output": {"text": ["Done"]}, "context": {"conversation_id": "c-42"}}"#);
    let client = client_with(spy.clone());

    let first = client
        .message("w1", &MessageRequest::text("I want a pizza"))
        .await
        .unwrap();
    let next = MessageRequest::follow_up(&first.result, "pepperoni");
    let second = client
        .message_with_options(
            "w1",
            &next,
            &MessageOptions {
                nodes_visited_details: Some(true),
            },
        )
        .await
        .unwrap();

    let sent = spy.last();
    let body = sent.json_body().unwrap();
    assert_eq!(body["input"], json!({"text": "pepperoni"}));
    assert_eq!(body["context"]["conversation_id"], "c-42");
    assert_eq!(body["context"]["pizza_size"], "large");
    assert_eq!(body["context"]["system"]["dialog_turn_counter"], 1);
    assert_eq!(sent.query_param("nodes_visited_details").as_deref(), Some("true"));
    assert_eq!(second.result.texts(), vec!["Done"]);
    assert_eq!(spy.calls(), 2);
}
