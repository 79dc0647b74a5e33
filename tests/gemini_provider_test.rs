// ABOUTME: Integration tests for the Gemini provider against a local stand-in upstream
// ABOUTME: Verifies request shape (schema, MIME type, key) and response/error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use fitdash::errors::{ErrorCode, GenerationFailure};
use fitdash::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
use fitdash::models::WorkoutPreferences;
use fitdash::plan::PlanService;
use helpers::mock_llm::sample_plan_json;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Captured {
    call: Arc<Mutex<Option<String>>>,
    key: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

#[derive(Clone)]
struct UpstreamState {
    captured: Captured,
    status: StatusCode,
    reply: Value,
}

async fn handle_generate(
    State(state): State<UpstreamState>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.captured.call.lock().unwrap() = Some(call);
    *state.captured.key.lock().unwrap() = query.get("key").cloned();
    *state.captured.body.lock().unwrap() = Some(body);
    (state.status, Json(state.reply.clone()))
}

async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Captured) {
    env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Captured::default();
    let app = Router::new()
        .route("/models/:call", post(handle_generate))
        .with_state(UpstreamState {
            captured: captured.clone(),
            status,
            reply,
        });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), captured)
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 300, "totalTokenCount": 420}
    })
}

#[tokio::test]
async fn test_plan_request_reaches_upstream_with_schema() {
    let (base_url, captured) = spawn_upstream(StatusCode::OK, candidate(&sample_plan_json())).await;
    let provider = GeminiProvider::new("test-key").with_base_url(base_url);
    let plans = PlanService::new(Arc::new(provider));

    let plan = plans
        .generate_plan(&WorkoutPreferences::default())
        .await
        .unwrap();
    assert_eq!(plan.strength.len(), 2);

    assert_eq!(
        captured.call.lock().unwrap().as_deref(),
        Some("gemini-3-flash-preview:generateContent")
    );
    assert_eq!(captured.key.lock().unwrap().as_deref(), Some("test-key"));

    let body = captured.body.lock().unwrap().clone().unwrap();
    let config = &body["generation_config"];
    assert_eq!(config["response_mime_type"], "application/json");
    assert_eq!(config["response_schema"]["required"][0], "title");
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Available Equipment: Treadmill, Dumbbells"));
}

#[tokio::test]
async fn test_complete_reports_usage_and_finish_reason() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, candidate("hello")).await;
    let provider = GeminiProvider::new("k").with_base_url(base_url);

    let response = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hi")]).with_model("gemini-2.5-flash"))
        .await
        .unwrap();

    assert_eq!(response.content, "hello");
    assert_eq!(response.model, "gemini-2.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, 420);
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited_code() {
    let reply = json!({"error": {"message": "Quota exceeded. Please retry in 2.5s."}});
    let (base_url, _) = spawn_upstream(StatusCode::TOO_MANY_REQUESTS, reply).await;
    let provider = GeminiProvider::new("k").with_base_url(base_url);

    let err = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert!(err.message.contains("3 seconds"));
}

#[tokio::test]
async fn test_upstream_error_becomes_generation_error() {
    let reply = json!({"error": {"message": "internal"}});
    let (base_url, _) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, reply).await;
    let plans = PlanService::new(Arc::new(GeminiProvider::new("k").with_base_url(base_url)));

    let err = plans
        .generate_plan(&WorkoutPreferences::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), GenerationFailure::Upstream);
}

#[tokio::test]
async fn test_non_json_candidate_text_is_malformed() {
    let (base_url, _) = spawn_upstream(StatusCode::OK, candidate("I cannot do that.")).await;
    let plans = PlanService::new(Arc::new(GeminiProvider::new("k").with_base_url(base_url)));

    let err = plans
        .generate_plan(&WorkoutPreferences::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), GenerationFailure::MalformedResponse);
}

#[tokio::test]
async fn test_missing_api_key_fails_without_network() {
    let provider = GeminiProvider::new("").with_base_url("http://127.0.0.1:9");
    let err = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}
