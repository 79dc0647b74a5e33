// ABOUTME: Workout plan generation module
// ABOUTME: Prompt and schema construction plus the provider-agnostic PlanService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Request Service
//!
//! Builds a prompt and an output schema from [`WorkoutPreferences`], sends them
//! through an [`LlmProvider`](crate::llm::LlmProvider), and parses the reply
//! into a [`WorkoutPlan`].
//!
//! [`WorkoutPreferences`]: fitdash_core::models::WorkoutPreferences
//! [`WorkoutPlan`]: fitdash_core::models::WorkoutPlan

/// Prompt text and response schema
pub mod prompt;
mod service;

pub use prompt::{build_plan_request, build_prompt, plan_response_schema};
pub use service::{parse_plan, PlanService};
