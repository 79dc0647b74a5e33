// ABOUTME: Deterministic virtual-clock scheduler used to drive the dashboard in tests
// ABOUTME: Events fire in due order, ties in scheduling order, only when the clock is advanced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use super::{ScheduledEvent, Scheduler, TimerToken};

/// Scheduler whose clock only moves when told to
#[derive(Debug)]
pub struct ManualScheduler {
    origin: DateTime<Utc>,
    elapsed: Duration,
    next_sequence: u64,
    queue: BTreeMap<(Duration, TimerToken), ScheduledEvent>,
    due_at: HashMap<TimerToken, Duration>,
}

impl ManualScheduler {
    /// Clock starting at `origin`
    #[must_use]
    pub fn new(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            elapsed: Duration::ZERO,
            next_sequence: 0,
            queue: BTreeMap::new(),
            due_at: HashMap::new(),
        }
    }

    /// Virtual time since the origin
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of wake-ups still pending
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop the earliest event due at or before `deadline`, moving the clock to it
    ///
    /// Returns `None` once nothing is due by `deadline`; the clock is then left
    /// where it was so the caller can finish with [`Self::advance_to`].
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TimerToken, ScheduledEvent)> {
        let (&(due, token), _) = self.queue.first_key_value()?;
        if due > deadline {
            return None;
        }
        let event = self.queue.remove(&(due, token))?;
        self.due_at.remove(&token);
        self.elapsed = self.elapsed.max(due);
        Some((token, event))
    }

    /// Move the clock forward to `deadline` without firing anything
    pub fn advance_to(&mut self, deadline: Duration) {
        self.elapsed = self.elapsed.max(deadline);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> DateTime<Utc> {
        TimeDelta::from_std(self.elapsed)
            .ok()
            .and_then(|offset| self.origin.checked_add_signed(offset))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn after(&mut self, delay: Duration, event: ScheduledEvent) -> TimerToken {
        let token = TimerToken::new(self.next_sequence);
        self.next_sequence += 1;
        let due = self.elapsed + delay;
        self.queue.insert((due, token), event);
        self.due_at.insert(token, due);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(due) = self.due_at.remove(&token) {
            self.queue.remove(&(due, token));
        }
    }
}
