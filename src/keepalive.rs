// ABOUTME: Periodic self-ping of the health endpoint to keep idle deployments awake
// ABOUTME: Failures are logged and ignored; the loop never touches dashboard or plan state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitdash_core::constants::routes;
use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::KeepaliveConfig;

/// Result of one ping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// No app URL configured
    Skipped,
    /// Health endpoint answered with a success status
    Healthy,
    /// Health endpoint answered with a non-success status
    Unhealthy(StatusCode),
    /// Request did not complete
    Failed(String),
}

/// Ping `{app_url}/api/health` once
pub async fn ping_once(client: &Client, app_url: Option<&str>) -> PingOutcome {
    let Some(base) = app_url else {
        info!("APP_URL not defined, skipping self-ping");
        return PingOutcome::Skipped;
    };

    let url = format!("{}{}", base.trim_end_matches('/'), routes::HEALTH);
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            info!(%url, "Self-ping succeeded");
            PingOutcome::Healthy
        }
        Ok(response) => {
            let status = response.status();
            warn!(%url, %status, "Self-ping returned non-success status");
            PingOutcome::Unhealthy(status)
        }
        Err(e) => {
            error!(%url, error = %e, "Self-ping failed");
            PingOutcome::Failed(e.to_string())
        }
    }
}

/// Ping on every interval until the task is aborted
///
/// The first ping happens one full interval after start.
#[must_use]
pub fn spawn_keepalive(config: KeepaliveConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = Client::new();
        let mut interval = time::interval(config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await;

        info!(
            interval_secs = config.interval.as_secs(),
            enabled = config.app_url.is_some(),
            "Keepalive task started"
        );

        loop {
            interval.tick().await;
            debug!("Periodic wakeup triggered");
            ping_once(&client, config.app_url.as_deref()).await;
        }
    })
}
