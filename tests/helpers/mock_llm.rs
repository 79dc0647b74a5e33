// ABOUTME: Scripted LlmProvider for exercising the plan service without network access
// ABOUTME: Replays queued replies in order and records every request it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fitdash::errors::{AppError, ErrorCode};
use fitdash::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

/// One scripted reply
pub enum MockReply {
    /// Successful completion with this text
    Text(String),
    /// Failure with this code and message
    Fail(ErrorCode, String),
}

/// Provider that answers from a queue
pub struct MockLlmProvider {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlmProvider {
    /// Provider replaying `replies` in order
    pub fn new(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider answering once with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new([MockReply::Text(text.into())])
    }

    /// Provider failing once
    pub fn failing(code: ErrorCode, message: &str) -> Self {
        Self::new([MockReply::Fail(code, message.to_owned())])
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::structured_output()
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(content)) => Ok(ChatResponse {
                content,
                model: request.model.clone().unwrap_or_else(|| "mock-model".to_owned()),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(MockReply::Fail(code, message)) => Err(AppError::new(code, message)),
            None => Err(AppError::internal("mock provider has no scripted reply")),
        }
    }
}

/// A well-formed plan as the model would return it
pub fn sample_plan_json() -> String {
    serde_json::json!({
        "title": "Treadmill & Dumbbell Starter",
        "summary": "A 45 minute beginner session for heart health.",
        "warmup": [
            {"name": "Brisk walk", "description": "Treadmill at 5 km/h", "duration": "5 min"}
        ],
        "cardio": [
            {"name": "Incline walk", "description": "Treadmill at 6% incline", "duration": "15 min", "intensity": "Moderate"}
        ],
        "strength": [
            {"name": "Goblet squat", "description": "Hold one dumbbell at chest", "sets": 3, "reps": "12"},
            {"name": "Bent-over row", "description": "Two dumbbells", "sets": 3, "reps": "10 each arm"}
        ],
        "cooldown": [
            {"name": "Hamstring stretch", "description": "Seated", "duration": "2 min"}
        ]
    })
    .to_string()
}
