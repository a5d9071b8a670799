use std::sync::Arc;
use watson_assistant::types::{CreateEntity, CreateIntent};
use watson_assistant::{Error, StandardErrorCode};

use super::mock_server::MockServerFixture;
use super::spy_transport::{client_with, DownTransport, SpyTransport};

#[tokio::test]
async fn test_empty_customer_id_sends_nothing() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let err = client.delete_user_data("").await.unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("customer_id"));
    assert!(err.response_data().is_none());
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn test_blank_path_parameters_send_nothing() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    assert!(client.delete_workspace(" ").await.unwrap_err().is_invalid_argument());
    assert!(client
        .get_synonym("w1", "topping", "", "peperoni", None)
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client
        .list_all_logs("", &Default::default())
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn test_invalid_names_rejected_before_sending() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let err = client
        .create_intent("w1", &CreateIntent::new("sys-greeting"), None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("reserved prefix"));

    let err = client
        .create_intent("w1", &CreateIntent::new("order pizza"), None)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn test_system_entity_is_sent() {
    let spy = SpyTransport::replying(201, r#"{"entity":"sys-number"}"#);
    let client = client_with(spy.clone());

    let created = client
        .create_entity("w1", &CreateEntity::new("sys-number"), None)
        .await
        .unwrap();
    assert_eq!(created.result.entity, "sys-number");
    assert_eq!(spy.calls(), 1);
    assert!(spy.last().url.path().ends_with("/v1/workspaces/w1/entities"));
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_text("GET", "/v1/workspaces/w1", 500, "upstream connect error")
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .get_workspace("w1", &Default::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.code(), StandardErrorCode::ServerError);
    let data = err.response_data().unwrap();
    assert_eq!(data.body, "upstream connect error");
    assert!(!data.success);
    assert_eq!(data.header("content-type"), Some("text/plain"));
    match err {
        Error::Remote { message, .. } => assert_eq!(message, "upstream connect error"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_watson_error_message_surfaces() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/workspaces/missing/intents/hello",
            404,
            r#"{"error":"Resource not found","code":404}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .get_intent("missing", "hello", &Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.code(), StandardErrorCode::NotFound);
    assert!(err.to_string().contains("Resource not found"));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let spy = SpyTransport::replying(200, "<html>maintenance</html>");
    let client = client_with(spy);

    let err = client.list_workspaces(&Default::default()).await.unwrap_err();

    match &err {
        Error::Deserialization { data, .. } => {
            assert_eq!(data.status, 200);
            assert!(!data.success);
            assert_eq!(data.body, "<html>maintenance</html>");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.code(), StandardErrorCode::MalformedResponse);
}

#[tokio::test]
async fn test_wrong_generic_shape_is_deserialization_error() {
    let spy = SpyTransport::replying(
        200,
        r#"{"output":{"generic":[{"response_type":"pause","time":"soon"}]}}"#,
    );
    let client = client_with(spy);

    let err = client
        .message("w1", &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn test_transport_failure_passes_through() {
    let client = client_with(Arc::new(DownTransport));

    let err = client.delete_user_data("cust-1").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.response_data().is_none());
    assert!(err.to_string().contains("connection refused"));
}
