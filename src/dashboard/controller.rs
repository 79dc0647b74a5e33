// ABOUTME: Dashboard controller owning the break timer and notification feed
// ABOUTME: All transitions go through its methods; scheduled wake-ups come back as ScheduledEvents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::time::Duration;

use fitdash_core::constants::notifications::NOTIFICATION_TTL;
use fitdash_core::constants::timer::{OFFICE_BREAK_MESSAGE, OFFICE_BREAK_TITLE, TICK_INTERVAL};
use fitdash_core::models::{Notification, NotificationCategory, NotificationId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::break_timer::{BreakTimer, TickOutcome};
use super::feed::NotificationFeed;
use crate::scheduler::{ManualScheduler, ScheduledEvent, Scheduler, TimerToken};

/// Read model of the break timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTimerView {
    /// Seconds left
    pub remaining_secs: u32,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Remaining time as `m:ss`
    pub display: String,
}

impl From<&BreakTimer> for BreakTimerView {
    fn from(timer: &BreakTimer) -> Self {
        Self {
            remaining_secs: timer.remaining(),
            running: timer.is_running(),
            display: timer.display(),
        }
    }
}

/// Serializable view of the whole dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Break timer state
    pub break_timer: BreakTimerView,
    /// Feed entries, newest first
    pub notifications: Vec<Notification>,
}

/// Single owner of timer and feed state
#[derive(Debug)]
pub struct DashboardController<S: Scheduler> {
    scheduler: S,
    timer: BreakTimer,
    feed: NotificationFeed,
    tick: Option<TimerToken>,
    expiries: HashMap<NotificationId, TimerToken>,
}

impl<S: Scheduler> DashboardController<S> {
    /// Controller with an idle timer at the full period and an empty feed
    pub fn new(scheduler: S) -> Self {
        Self::with_timer(scheduler, BreakTimer::new())
    }

    /// Controller starting from a given timer
    pub fn with_timer(scheduler: S, timer: BreakTimer) -> Self {
        Self {
            scheduler,
            timer,
            feed: NotificationFeed::new(),
            tick: None,
            expiries: HashMap::new(),
        }
    }

    /// Scheduler in use
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Current break timer
    pub const fn timer(&self) -> &BreakTimer {
        &self.timer
    }

    /// Current feed
    pub const fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    /// Add a notification and schedule its removal after the fixed lifetime
    pub fn push_notification(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
    ) -> Notification {
        let notification = Notification::new(title, message, category, self.scheduler.now());
        let id = notification.id;

        for evicted in self.feed.push(notification.clone()) {
            debug!(id = %evicted.id, "Notification evicted by capacity");
            self.cancel_expiry(evicted.id);
        }

        let token = self
            .scheduler
            .after(NOTIFICATION_TTL, ScheduledEvent::ExpireNotification(id));
        self.expiries.insert(id, token);
        debug!(%id, title = %notification.title, "Notification pushed");
        notification
    }

    /// Remove a notification; returns false if it was already gone
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.cancel_expiry(id);
        self.feed.dismiss(id).is_some()
    }

    /// Start the countdown; no-op when already running
    pub fn start_break_timer(&mut self) {
        if self.timer.start() {
            self.schedule_tick();
            debug!(remaining = self.timer.remaining(), "Break timer started");
        }
    }

    /// Pause the countdown, keeping the counter; no-op when idle
    pub fn stop_break_timer(&mut self) {
        if self.timer.stop() {
            self.cancel_tick();
            debug!(remaining = self.timer.remaining(), "Break timer stopped");
        }
    }

    /// Start if idle, stop if running
    pub fn toggle_break_timer(&mut self) {
        if self.timer.is_running() {
            self.stop_break_timer();
        } else {
            self.start_break_timer();
        }
    }

    /// Apply a delivered wake-up
    pub fn handle(&mut self, token: TimerToken, event: ScheduledEvent) {
        self.scheduler.release(token);
        match event {
            ScheduledEvent::BreakTimerTick => {
                if self.tick == Some(token) {
                    self.tick = None;
                    self.on_tick();
                }
            }
            ScheduledEvent::ExpireNotification(id) => {
                if self.expiries.get(&id) == Some(&token) {
                    self.expiries.remove(&id);
                }
                if self.feed.dismiss(id).is_some() {
                    debug!(%id, "Notification expired");
                }
            }
        }
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            break_timer: BreakTimerView::from(&self.timer),
            notifications: self.feed.iter().cloned().collect(),
        }
    }

    fn on_tick(&mut self) {
        match self.timer.tick() {
            TickOutcome::Ignored => {}
            TickOutcome::Counting { .. } => self.schedule_tick(),
            TickOutcome::Expired => {
                info!("Break timer expired");
                self.push_notification(
                    OFFICE_BREAK_TITLE,
                    OFFICE_BREAK_MESSAGE,
                    NotificationCategory::Office,
                );
            }
        }
    }

    fn schedule_tick(&mut self) {
        self.cancel_tick();
        self.tick = Some(
            self.scheduler
                .after(TICK_INTERVAL, ScheduledEvent::BreakTimerTick),
        );
    }

    fn cancel_tick(&mut self) {
        if let Some(token) = self.tick.take() {
            self.scheduler.cancel(token);
        }
    }

    fn cancel_expiry(&mut self, id: NotificationId) {
        if let Some(token) = self.expiries.remove(&id) {
            self.scheduler.cancel(token);
        }
    }
}

impl DashboardController<ManualScheduler> {
    /// Move virtual time forward by `by`, delivering every wake-up that falls due
    ///
    /// Wake-ups scheduled while advancing are delivered too if they fall inside
    /// the window. Returns the number of events delivered.
    pub fn advance(&mut self, by: Duration) -> usize {
        let deadline = self.scheduler.elapsed() + by;
        let mut delivered = 0;
        while let Some((token, event)) = self.scheduler.pop_due(deadline) {
            self.handle(token, event);
            delivered += 1;
        }
        self.scheduler.advance_to(deadline);
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DashboardController<ManualScheduler> {
        DashboardController::new(ManualScheduler::default())
    }

    #[test]
    fn test_stale_tick_token_is_ignored() {
        let mut dash = controller();
        dash.start_break_timer();
        let stale = TimerToken::new(999);
        dash.handle(stale, ScheduledEvent::BreakTimerTick);
        assert_eq!(dash.timer().remaining(), 2700);
    }

    #[test]
    fn test_eviction_cancels_expiry() {
        let mut dash = controller();
        for i in 0..5 {
            dash.push_notification(format!("n{i}"), "m", NotificationCategory::Diet);
        }
        assert_eq!(dash.feed().len(), 3);
        assert_eq!(dash.scheduler().pending(), 3);
    }

    #[test]
    fn test_restart_does_not_double_tick() {
        let mut dash = controller();
        dash.start_break_timer();
        dash.stop_break_timer();
        dash.start_break_timer();
        dash.start_break_timer();
        assert_eq!(dash.scheduler().pending(), 1);
        dash.advance(Duration::from_secs(1));
        assert_eq!(dash.timer().remaining(), 2699);
    }
}
