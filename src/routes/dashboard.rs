// ABOUTME: Dashboard routes for the break timer and notification feed
// ABOUTME: Thin handlers forwarding to the DashboardHandle of the runtime task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard routes
//!
//! Every handler returns the state as seen by the runtime right after the
//! command was applied.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use fitdash_core::constants::routes;
use fitdash_core::errors::AppError;
use fitdash_core::models::{Notification, NotificationCategory, NotificationId};
use serde::Deserialize;

use crate::dashboard::{DashboardHandle, DashboardSnapshot};

/// Body of a notification push
#[derive(Debug, Deserialize)]
pub struct PushNotificationRequest {
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Category (`type` accepted as an alias)
    #[serde(alias = "type")]
    pub category: NotificationCategory,
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(dashboard: DashboardHandle) -> Router {
        let timer = format!("{}/timer", routes::DASHBOARD);
        let notifications = format!("{}/notifications", routes::DASHBOARD);

        Router::new()
            .route(routes::DASHBOARD, get(Self::handle_snapshot))
            .route(&format!("{timer}/start"), post(Self::handle_start))
            .route(&format!("{timer}/stop"), post(Self::handle_stop))
            .route(&format!("{timer}/toggle"), post(Self::handle_toggle))
            .route(&notifications, post(Self::handle_push))
            .route(&format!("{notifications}/:id"), delete(Self::handle_dismiss))
            .with_state(dashboard)
    }

    async fn handle_snapshot(
        State(dashboard): State<DashboardHandle>,
    ) -> Result<Json<DashboardSnapshot>, AppError> {
        Ok(Json(dashboard.snapshot().await?))
    }

    async fn handle_start(
        State(dashboard): State<DashboardHandle>,
    ) -> Result<Json<DashboardSnapshot>, AppError> {
        Ok(Json(dashboard.start_timer().await?))
    }

    async fn handle_stop(
        State(dashboard): State<DashboardHandle>,
    ) -> Result<Json<DashboardSnapshot>, AppError> {
        Ok(Json(dashboard.stop_timer().await?))
    }

    async fn handle_toggle(
        State(dashboard): State<DashboardHandle>,
    ) -> Result<Json<DashboardSnapshot>, AppError> {
        Ok(Json(dashboard.toggle_timer().await?))
    }

    async fn handle_push(
        State(dashboard): State<DashboardHandle>,
        Json(request): Json<PushNotificationRequest>,
    ) -> Result<(StatusCode, Json<Notification>), AppError> {
        if request.title.trim().is_empty() {
            return Err(AppError::invalid_input("Notification title must not be empty"));
        }
        let notification = dashboard
            .push_notification(request.title, request.message, request.category)
            .await?;
        Ok((StatusCode::CREATED, Json(notification)))
    }

    async fn handle_dismiss(
        State(dashboard): State<DashboardHandle>,
        Path(id): Path<NotificationId>,
    ) -> Result<StatusCode, AppError> {
        dashboard.dismiss_notification(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
