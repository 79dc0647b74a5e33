// ABOUTME: Scheduler abstraction delivering delayed events back to the dashboard controller
// ABOUTME: Provides a virtual-clock ManualScheduler for tests and a tokio-backed scheduler for production
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scheduler
//!
//! Wake-ups are data, not closures: the controller asks for a
//! [`ScheduledEvent`] to be delivered after a delay and later receives it back
//! together with its [`TimerToken`]. Nothing scheduled ever holds a reference
//! to controller state.

mod manual;
mod tokio_scheduler;

pub use manual::ManualScheduler;
pub use tokio_scheduler::{EventReceiver, TokioScheduler};

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use fitdash_core::models::NotificationId;

/// Handle to one pending wake-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Token with a raw sequence number
    #[must_use]
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// What a wake-up asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// One-second break timer tick
    BreakTimerTick,
    /// Remove a notification whose lifetime elapsed
    ExpireNotification(NotificationId),
}

/// Source of time and delayed events
pub trait Scheduler {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;

    /// Deliver `event` once `delay` has elapsed
    fn after(&mut self, delay: Duration, event: ScheduledEvent) -> TimerToken;

    /// Drop a pending wake-up; unknown or already-fired tokens are ignored
    fn cancel(&mut self, token: TimerToken);

    /// Forget bookkeeping for a token whose event was delivered
    fn release(&mut self, token: TimerToken) {
        let _ = token;
    }
}
