// ABOUTME: Plan request service turning workout preferences into a validated WorkoutPlan
// ABOUTME: One upstream call per request, no retry; failures are logged and collapsed into GenerationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use fitdash_core::errors::GenerationError;
use fitdash_core::models::{WorkoutPlan, WorkoutPreferences};
use tracing::{error, info, instrument, warn};

use super::prompt::build_plan_request;
use crate::llm::LlmProvider;

/// Generates workout plans through an [`LlmProvider`]
#[derive(Clone)]
pub struct PlanService {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl PlanService {
    /// Service using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_owned();
        Self { provider, model }
    }

    /// Override the model used for plan requests
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Model sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the provider for a plan and parse the reply
    ///
    /// Concurrent calls are independent; nothing is cached or deduplicated.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] when the upstream call fails or the reply
    /// is not a complete plan. The cause is logged, not returned.
    #[instrument(skip(self, preferences), fields(provider = self.provider.name(), model = %self.model, level = %preferences.level))]
    pub async fn generate_plan(
        &self,
        preferences: &WorkoutPreferences,
    ) -> Result<WorkoutPlan, GenerationError> {
        if !self.provider.capabilities().supports_json_mode() {
            warn!("Provider does not advertise JSON mode; relying on the prompt alone");
        }

        let request = build_plan_request(preferences, &self.model);
        let response = self.provider.complete(&request).await.map_err(|e| {
            error!(error = %e, code = ?e.code, "Workout plan request failed upstream");
            GenerationError::upstream()
        })?;

        let plan = parse_plan(&response.content)?;
        info!(
            title = %plan.title,
            exercises = plan.exercise_count(),
            "Generated workout plan"
        );
        Ok(plan)
    }
}

/// Parse model output into a [`WorkoutPlan`]
///
/// # Errors
///
/// Malformed JSON, missing sections, or wrongly typed values yield a
/// malformed-response error. A blank title or summary yields an
/// incomplete-plan error.
pub fn parse_plan(text: &str) -> Result<WorkoutPlan, GenerationError> {
    let plan: WorkoutPlan = serde_json::from_str(text.trim()).map_err(|e| {
        error!(error = %e, "Failed to parse workout plan");
        GenerationError::malformed_response()
    })?;

    if !plan.has_required_text() {
        error!("Workout plan is missing a title or summary");
        return Err(GenerationError::incomplete_plan());
    }

    Ok(plan)
}
