// ABOUTME: Main library entry point for the FitDash workout dashboard backend
// ABOUTME: AI workout plan generation plus the break timer and notification coordinator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitDash`
//!
//! Backend for a personal fitness dashboard.
//!
//! ## Architecture
//!
//! - **Plan**: builds a prompt and JSON schema from workout preferences and
//!   parses the model's reply into a typed `WorkoutPlan`
//! - **LLM**: provider trait and the Gemini implementation
//! - **Dashboard**: 45-minute break timer and a bounded, auto-expiring
//!   notification feed, owned by one controller
//! - **Scheduler**: delayed events for the controller (virtual clock in tests)
//! - **Routes**: `axum` HTTP API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitdash::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitDash configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Break timer, notification feed, controller, and runtime task
pub mod dashboard;

/// Periodic self-ping of the health endpoint
pub mod keepalive;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Workout plan prompt, schema, and service
pub mod plan;

/// HTTP routes
pub mod routes;

/// Delayed event delivery
pub mod scheduler;

pub use fitdash_core::{constants, errors, models};
