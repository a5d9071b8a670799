//! Benchmarks for request building
//!
//! This benchmark measures:
//! - Serialization of nested workspace bodies
//! - Full client dispatch (URL, headers, body) against a no-op transport

use async_trait::async_trait;
use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

use watson_assistant::transport::{
    Transport, TransportError, TransportRequest, TransportResponse,
};
use watson_assistant::types::{CreateEntity, CreateIntent, CreateValue, CreateWorkspace, MessageRequest};
use watson_assistant::{AssistantClientBuilder, Authenticator};

struct NoopTransport;

#[async_trait]
impl Transport for NoopTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        black_box(&request);
        Ok(TransportResponse {
            status: 200,
            body: Bytes::from_static(br#"{"output":{"text":["ok"]},"context":{"conversation_id":"c"}}"#),
            ..TransportResponse::default()
        })
    }
}

fn workspace(intents: usize) -> CreateWorkspace {
    let mut ws = CreateWorkspace::new("bench").with_language("en");
    for i in 0..intents {
        ws = ws.with_intent(
            CreateIntent::new(format!("intent_{i}"))
                .with_examples((0..10).map(|j| format!("example {j} of intent {i}"))),
        );
    }
    ws.with_entity(
        CreateEntity::new("size")
            .with_value(CreateValue::synonyms("large", ["big", "huge"]))
            .with_value(CreateValue::patterns("code", [r"[A-Z]{3}-\d+"])),
    )
}

fn bench_workspace_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("workspace_body");
    for intents in [1usize, 10, 100] {
        let ws = workspace(intents);
        group.throughput(Throughput::Elements(intents as u64));
        group.bench_with_input(BenchmarkId::from_parameter(intents), &ws, |b, ws| {
            b.iter(|| serde_json::to_vec(black_box(ws)).unwrap())
        });
    }
    group.finish();
}

fn bench_message_dispatch(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let client = AssistantClientBuilder::new()
        .version("2021-06-14")
        .service_url("https://assistant.example.test/instances/bench")
        .authenticator(Authenticator::api_key("bench-key"))
        .transport(Arc::new(NoopTransport))
        .build()
        .unwrap();
    let request = MessageRequest::text("I would like a large pizza");

    c.bench_function("message_dispatch", |b| {
        b.to_async(&rt)
            .iter(|| async { client.message("w/1", black_box(&request)).await.unwrap() })
    });
}

criterion_group!(benches, bench_workspace_serialization, bench_message_dispatch);
criterion_main!(benches);
