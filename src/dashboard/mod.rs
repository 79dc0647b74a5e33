// ABOUTME: Break timer and notification coordinator for the dashboard
// ABOUTME: Pure state machines, the controller that owns them, and the tokio runtime task around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Coordinator
//!
//! - [`BreakTimer`]: 45-minute countdown, Idle/Running
//! - [`NotificationFeed`]: newest-first, capacity 3
//! - [`DashboardController`]: owns both, schedules ticks and expiries
//! - [`spawn_dashboard`]: runs a controller on one task behind a [`DashboardHandle`]

mod break_timer;
mod controller;
mod feed;
mod runtime;

pub use break_timer::{format_clock, BreakTimer, TickOutcome, TimerState};
pub use controller::{BreakTimerView, DashboardController, DashboardSnapshot};
pub use feed::NotificationFeed;
pub use runtime::{spawn_dashboard, DashboardHandle};

use chrono::Weekday;

/// Greeting pushed when the server starts
#[must_use]
pub fn welcome_message(day: Weekday) -> String {
    let name = match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    format!("It's {name}. Ready for today's session?")
}
