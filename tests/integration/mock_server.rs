//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;
use watson_assistant::{AssistantClient, AssistantClientBuilder, Authenticator};

pub const VERSION: &str = "2021-06-14";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Client pointed at the mock server through the default `reqwest` transport.
    pub fn create_test_client(&self) -> watson_assistant::Result<AssistantClient> {
        AssistantClientBuilder::new()
            .version(VERSION)
            .service_url(&self.base_url)
            .authenticator(Authenticator::api_key("test-key"))
            .build()
    }

    /// Mock `method path` answering with a JSON body. Only requests carrying the
    /// client's `version` match.
    pub async fn mock_json(&self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_query(Matcher::UrlEncoded("version".into(), VERSION.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock answering with a plain-text body, e.g. a proxy error page.
    pub async fn mock_text(&self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .create_async()
            .await
    }
}
