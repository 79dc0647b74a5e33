// ABOUTME: Core types and constants for the FitDash workout dashboard
// ABOUTME: Foundation crate with error handling, workout/notification models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitDash` Core
//!
//! Foundation crate providing shared types and constants for the `FitDash`
//! dashboard. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `GenerationError`
//! - **constants**: Timer, notification, generation, and network constants
//! - **models**: Workout preferences, plans, exercises, and notifications

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`WorkoutPlan`, `Exercise`, `Notification`, etc.)
pub mod models;
