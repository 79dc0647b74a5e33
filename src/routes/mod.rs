// ABOUTME: Route module organization for FitDash HTTP endpoints
// ABOUTME: Merges domain routers and applies request tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the `FitDash` server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the plan service or the dashboard runtime.

/// Dashboard timer and notification routes
pub mod dashboard;
/// Health check route
pub mod health;
/// Workout plan generation routes
pub mod workouts;

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use workouts::WorkoutRoutes;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::dashboard::DashboardHandle;
use crate::plan::PlanService;

/// Services the HTTP layer delegates to
#[derive(Clone)]
pub struct AppState {
    /// Plan generation
    pub plans: Arc<PlanService>,
    /// Dashboard runtime handle
    pub dashboard: DashboardHandle,
}

/// Permissive CORS for the browser front end
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

/// Full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(WorkoutRoutes::routes(state.plans))
        .merge(DashboardRoutes::routes(state.dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
}
