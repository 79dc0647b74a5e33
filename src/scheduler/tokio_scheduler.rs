// ABOUTME: Tokio-backed scheduler posting delayed events onto the dashboard runtime's channel
// ABOUTME: Each wake-up is a sleeping task; cancellation aborts the task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time;
use tracing::trace;

use super::{ScheduledEvent, Scheduler, TimerToken};

/// Receiving end for events produced by a [`TokioScheduler`]
pub type EventReceiver = mpsc::UnboundedReceiver<(TimerToken, ScheduledEvent)>;

/// Scheduler spawning one sleeping task per wake-up
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    events: mpsc::UnboundedSender<(TimerToken, ScheduledEvent)>,
    tasks: HashMap<TimerToken, AbortHandle>,
    next_sequence: u64,
}

impl TokioScheduler {
    /// Scheduler plus the receiver its events arrive on
    #[must_use]
    pub fn new() -> (Self, EventReceiver) {
        let (events, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            events,
            tasks: HashMap::new(),
            next_sequence: 0,
        };
        (scheduler, receiver)
    }

    /// Wake-ups not yet delivered or cancelled
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn after(&mut self, delay: Duration, event: ScheduledEvent) -> TimerToken {
        let token = TimerToken::new(self.next_sequence);
        self.next_sequence += 1;

        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            // Receiver gone means the runtime stopped; nothing left to notify.
            let _ = events.send((token, event));
        });
        self.tasks.insert(token, handle.abort_handle());
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            trace!(%token, "Cancelling scheduled wake-up");
            handle.abort();
        }
    }

    fn release(&mut self, token: TimerToken) {
        self.tasks.remove(&token);
    }
}
