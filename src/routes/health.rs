// ABOUTME: Health check route polled by load balancers and the keepalive task
// ABOUTME: Returns a fixed ok status with the current RFC 3339 timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use chrono::Utc;
use fitdash_core::constants::routes;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route(routes::HEALTH, get(Self::handle_health))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
