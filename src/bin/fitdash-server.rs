// ABOUTME: FitDash HTTP server binary
// ABOUTME: Loads config, starts the dashboard runtime and keepalive, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `FitDash` Server Binary

use std::future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use fitdash::{
    config::ServerConfig,
    constants::notifications::WELCOME_TITLE,
    dashboard::{spawn_dashboard, welcome_message},
    keepalive::spawn_keepalive,
    llm::GeminiProvider,
    logging::LoggingConfig,
    models::NotificationCategory,
    plan::PlanService,
    routes::{router, AppState},
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "fitdash-server")]
#[command(about = "FitDash - AI workout plans and office break reminders")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    LoggingConfig::for_server(&config).init()?;
    config.validate()?;
    info!("{}", config.summary());

    let provider = GeminiProvider::new(config.gemini.api_key.clone().unwrap_or_default())
        .with_base_url(&config.gemini.base_url)
        .with_default_model(&config.gemini.model);
    let plans = Arc::new(PlanService::new(Arc::new(provider)));

    let (dashboard, dashboard_task) = spawn_dashboard();
    dashboard
        .push_notification(
            WELCOME_TITLE,
            welcome_message(Local::now().weekday()),
            NotificationCategory::Workout,
        )
        .await?;

    let keepalive = spawn_keepalive(config.keepalive.clone());

    let addr: SocketAddr = format!("{}:{}", config.http_host, config.http_port)
        .parse()
        .map_err(|e| anyhow!("Invalid bind address: {e}"))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Server running");

    let app = router(AppState { plans, dashboard });
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    keepalive.abort();
    dashboard_task.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal; running until killed");
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
