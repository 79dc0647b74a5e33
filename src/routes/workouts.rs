// ABOUTME: Workout plan generation route
// ABOUTME: Accepts WorkoutPreferences and returns a WorkoutPlan or a fixed-message 502
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use fitdash_core::constants::routes;
use fitdash_core::errors::AppError;
use fitdash_core::models::{WorkoutPlan, WorkoutPreferences};

use crate::plan::PlanService;

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create workout routes
    pub fn routes(plans: Arc<PlanService>) -> Router {
        Router::new()
            .route(routes::GENERATE_WORKOUT, post(Self::handle_generate))
            .with_state(plans)
    }

    async fn handle_generate(
        State(plans): State<Arc<PlanService>>,
        Json(preferences): Json<WorkoutPreferences>,
    ) -> Result<Json<WorkoutPlan>, AppError> {
        let plan = plans.generate_plan(&preferences).await?;
        Ok(Json(plan))
    }
}
