//! Transport double that records requests and replays canned responses.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use watson_assistant::transport::{
    Transport, TransportError, TransportRequest, TransportResponse,
};
use watson_assistant::{AssistantClient, AssistantClientBuilder, Authenticator};

use super::mock_server::VERSION;

pub const SERVICE_URL: &str = "https://assistant.example.test/instances/i-1";

#[derive(Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<TransportRequest>>,
    replies: Mutex<VecDeque<TransportResponse>>,
}

impl SpyTransport {
    /// Spy that answers every request with `200 {}` unless replies are queued.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let spy = Self::new();
        spy.push_reply(status, body);
        spy
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(TransportResponse {
            status,
            body: Bytes::from(body.to_string()),
            ..TransportResponse::default()
        });
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        Ok(reply.unwrap_or_else(|| TransportResponse {
            status: 200,
            body: Bytes::from_static(b"{}"),
            ..TransportResponse::default()
        }))
    }
}

/// Transport that fails every call as if the network were down.
pub struct DownTransport;

#[async_trait]
impl Transport for DownTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
        Err(TransportError::Other("connection refused".into()))
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> AssistantClient {
    AssistantClientBuilder::new()
        .version(VERSION)
        .service_url(SERVICE_URL)
        .authenticator(Authenticator::api_key("test-key"))
        .transport(transport)
        .build()
        .unwrap()
}
