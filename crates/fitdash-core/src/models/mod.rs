// ABOUTME: Core data models for the FitDash workout dashboard
// ABOUTME: Re-exports workout preference, plan, exercise, and notification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutPreferences`: the four inputs of an on-demand plan request
//! - `WorkoutPlan` / `Exercise`: the four-section plan returned by the generator
//! - `Prescription`: exhaustive view over an exercise's sets/reps/duration
//! - `Notification`: a transient, auto-expiring dashboard message

mod notification;
mod workout;

pub use notification::{Notification, NotificationCategory, NotificationId};
pub use workout::{
    Exercise, FitnessLevel, PlanSection, Prescription, WorkoutPlan, WorkoutPreferences,
};
