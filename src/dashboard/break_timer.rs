// ABOUTME: 45-minute office break countdown as an explicit Idle/Running state machine
// ABOUTME: Ticks report Ignored, Counting, or Expired; expiry resets to the full period and goes idle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitdash_core::constants::timer::BREAK_PERIOD_SECS;
use serde::{Deserialize, Serialize};

/// Whether the countdown is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Paused or never started
    #[default]
    Idle,
    /// Counting down once per second
    Running,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was idle; nothing changed
    Ignored,
    /// Counter decremented and is still positive
    Counting {
        /// Seconds left
        remaining: u32,
    },
    /// Counter reached zero; the timer is idle again at the full period
    Expired,
}

/// Break reminder countdown bounded to `0..=BREAK_PERIOD_SECS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTimer {
    remaining: u32,
    state: TimerState,
}

impl BreakTimer {
    /// Idle timer at the full period
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining: BREAK_PERIOD_SECS,
            state: TimerState::Idle,
        }
    }

    /// Idle timer with `remaining` seconds, clamped to the period
    #[must_use]
    pub fn with_remaining(remaining: u32) -> Self {
        Self {
            remaining: remaining.min(BREAK_PERIOD_SECS),
            state: TimerState::Idle,
        }
    }

    /// Seconds left
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the countdown is advancing
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running)
    }

    /// Start counting; returns false if already running
    pub fn start(&mut self) -> bool {
        let changed = !self.is_running();
        self.state = TimerState::Running;
        changed
    }

    /// Pause, keeping the counter; returns false if already idle
    pub fn stop(&mut self) -> bool {
        let changed = self.is_running();
        self.state = TimerState::Idle;
        changed
    }

    /// Start if idle, stop if running; returns the new state
    pub fn toggle(&mut self) -> TimerState {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.state
    }

    /// Advance one second
    ///
    /// The tick that takes the counter from 1 to 0 also resets it to the
    /// full period and idles the timer, so `remaining()` never reads 0.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = BREAK_PERIOD_SECS;
            self.state = TimerState::Idle;
            return TickOutcome::Expired;
        }
        TickOutcome::Counting {
            remaining: self.remaining,
        }
    }

    /// Counter rendered as `m:ss`
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

impl Default for BreakTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render seconds as `m:ss` (minutes unpadded)
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
