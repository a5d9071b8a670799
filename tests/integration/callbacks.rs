use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use watson_assistant::types::{CreateWorkspace, Workspace, WorkspaceCollection};
use watson_assistant::{Callbacks, DetailedResponse, Error, ListOptions};

use super::mock_server::MockServerFixture;
use super::spy_transport::{client_with, SpyTransport};

#[tokio::test]
async fn test_missing_failure_continuation_sends_nothing() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());
    let invoked = Arc::new(AtomicUsize::new(0));
    let counter = invoked.clone();

    let callbacks = Callbacks::new().on_success(|_: Workspace, _| {});
    let result = client.submit("create_workspace", callbacks, move |c| {
        counter.fetch_add(1, Ordering::SeqCst);
        async move { c.create_workspace(&CreateWorkspace::new("Pizza"), None).await }
    });

    let err = result.err().expect("submit must reject missing continuation");
    assert!(err.is_invalid_argument());
    assert_eq!(invoked.load(Ordering::SeqCst), 0);
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn test_missing_success_continuation_sends_nothing() {
    let spy = SpyTransport::new();
    let client = client_with(spy.clone());

    let callbacks = Callbacks::<()>::new().on_failure(|_, _| {});
    let result = client.submit("delete_user_data", callbacks, |c| async move {
        c.delete_user_data("cust-1").await
    });

    assert!(result.is_err());
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn test_success_fires_exactly_once() {
    let spy = SpyTransport::replying(201, r#"{"name":"Pizza","workspace_id":"w1"}"#);
    let client = client_with(spy.clone());
    let successes = Arc::new(Mutex::new(Vec::new()));
    let failures = Arc::new(AtomicUsize::new(0));

    let sink = successes.clone();
    let fail_count = failures.clone();
    let callbacks = Callbacks::new()
        .on_success(move |ws: Workspace, data| {
            sink.lock()
                .unwrap()
                .push((ws.workspace_id().map(str::to_string), data.status));
        })
        .on_failure(move |_, _| {
            fail_count.fetch_add(1, Ordering::SeqCst);
        });

    let handle = client
        .submit("create_workspace", callbacks, |c| async move {
            c.create_workspace(&CreateWorkspace::new("Pizza"), None).await
        })
        .unwrap();
    handle.await.unwrap();

    assert_eq!(
        *successes.lock().unwrap(),
        vec![(Some("w1".to_string()), 201)]
    );
    assert_eq!(failures.load(Ordering::SeqCst), 0);
    assert_eq!(spy.calls(), 1);
}

#[tokio::test]
async fn test_server_error_fires_failure_with_raw_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_text("DELETE", "/v1/user_data", 500, "Internal Server Error page")
        .await;
    let client = fixture.create_test_client().unwrap();

    let successes = Arc::new(AtomicUsize::new(0));
    let failure = Arc::new(Mutex::new(None));

    let success_count = successes.clone();
    let failure_sink = failure.clone();
    let callbacks = Callbacks::new()
        .on_success(move |_: (), _| {
            success_count.fetch_add(1, Ordering::SeqCst);
        })
        .on_failure(move |err, data| {
            *failure_sink.lock().unwrap() = Some((err.status(), data.status, data.body));
        });

    client
        .submit("delete_user_data", callbacks, |c| async move {
            c.delete_user_data("cust-1").await
        })
        .unwrap()
        .await
        .unwrap();

    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert_eq!(
        failure.lock().unwrap().clone(),
        Some((Some(500), 500, "Internal Server Error page".to_string()))
    );
}

#[tokio::test]
async fn test_list_server_error_fires_failure_with_raw_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_text("GET", "/v1/workspaces", 500, "<html>upstream down</html>")
        .await;
    let client = fixture.create_test_client().unwrap();

    let successes = Arc::new(AtomicUsize::new(0));
    let failure = Arc::new(Mutex::new(None));

    let success_count = successes.clone();
    let failure_sink = failure.clone();
    let callbacks = Callbacks::new()
        .on_success(move |_: WorkspaceCollection, _| {
            success_count.fetch_add(1, Ordering::SeqCst);
        })
        .on_failure(move |err, data| {
            *failure_sink.lock().unwrap() = Some((err.status(), data.body));
        });

    client
        .submit("list_workspaces", callbacks, |c| async move {
            c.list_workspaces(&ListOptions::default()).await
        })
        .unwrap()
        .await
        .unwrap();

    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert_eq!(
        failure.lock().unwrap().clone(),
        Some((Some(500), "<html>upstream down</html>".to_string()))
    );
}

async fn explode() -> watson_assistant::Result<DetailedResponse<()>> {
    panic!("lost the socket")
}

#[tokio::test]
async fn test_panicking_operation_fires_failure() {
    let client = client_with(SpyTransport::new());
    let failure = Arc::new(Mutex::new(None));
    let sink = failure.clone();

    let callbacks = Callbacks::new()
        .on_success(|_: (), _| panic!("success must not fire"))
        .on_failure(move |err, data| {
            let is_runtime = matches!(err, Error::Runtime { .. });
            *sink.lock().unwrap() = Some((is_runtime, err.to_string(), data.status));
        });

    client
        .submit("delete_workspace", callbacks, |_c| explode())
        .unwrap()
        .await
        .unwrap();

    let (is_runtime, text, status) = failure.lock().unwrap().clone().unwrap();
    assert!(is_runtime);
    assert!(text.contains("lost the socket"));
    assert_eq!(status, 0);
}
