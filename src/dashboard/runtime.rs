// ABOUTME: Dashboard runtime task owning the controller and a cloneable handle to talk to it
// ABOUTME: Commands and scheduled wake-ups are processed one at a time on a single task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitdash_core::errors::{AppError, AppResult};
use fitdash_core::models::{Notification, NotificationCategory, NotificationId};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::controller::{DashboardController, DashboardSnapshot};
use crate::scheduler::{EventReceiver, TokioScheduler};

/// Buffered commands before senders wait
const COMMAND_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    Snapshot(Reply<DashboardSnapshot>),
    StartTimer(Reply<DashboardSnapshot>),
    StopTimer(Reply<DashboardSnapshot>),
    ToggleTimer(Reply<DashboardSnapshot>),
    Push {
        title: String,
        message: String,
        category: NotificationCategory,
        reply: Reply<Notification>,
    },
    Dismiss {
        id: NotificationId,
        reply: Reply<bool>,
    },
}

/// Cloneable handle to the dashboard runtime
#[derive(Debug, Clone)]
pub struct DashboardHandle {
    commands: mpsc::Sender<Command>,
}

/// Spawn the dashboard runtime on the current tokio runtime
///
/// The task ends once every [`DashboardHandle`] has been dropped.
#[must_use]
pub fn spawn_dashboard() -> (DashboardHandle, JoinHandle<()>) {
    let (scheduler, events) = TokioScheduler::new();
    let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
    let controller = DashboardController::new(scheduler);
    let task = tokio::spawn(run(controller, receiver, events));
    (DashboardHandle { commands }, task)
}

async fn run(
    mut controller: DashboardController<TokioScheduler>,
    mut commands: mpsc::Receiver<Command>,
    mut events: EventReceiver,
) {
    info!("Dashboard runtime started");
    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                apply(&mut controller, command);
            }
            Some((token, event)) = events.recv() => {
                controller.handle(token, event);
            }
        }
    }
    info!("Dashboard runtime stopped");
}

fn apply(controller: &mut DashboardController<TokioScheduler>, command: Command) {
    // A dropped reply receiver just means the caller stopped waiting.
    match command {
        Command::Snapshot(reply) => {
            let _ = reply.send(controller.snapshot());
        }
        Command::StartTimer(reply) => {
            controller.start_break_timer();
            let _ = reply.send(controller.snapshot());
        }
        Command::StopTimer(reply) => {
            controller.stop_break_timer();
            let _ = reply.send(controller.snapshot());
        }
        Command::ToggleTimer(reply) => {
            controller.toggle_break_timer();
            let _ = reply.send(controller.snapshot());
        }
        Command::Push {
            title,
            message,
            category,
            reply,
        } => {
            let _ = reply.send(controller.push_notification(title, message, category));
        }
        Command::Dismiss { id, reply } => {
            let removed = controller.dismiss_notification(id);
            debug!(%id, removed, "Dismiss requested");
            let _ = reply.send(removed);
        }
    }
}

impl DashboardHandle {
    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> Command) -> AppResult<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| AppError::internal("Dashboard runtime is not running"))?;
        response
            .await
            .map_err(|_| AppError::internal("Dashboard runtime dropped the request"))
    }

    /// Current state
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn snapshot(&self) -> AppResult<DashboardSnapshot> {
        self.request(Command::Snapshot).await
    }

    /// Start the break timer
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn start_timer(&self) -> AppResult<DashboardSnapshot> {
        self.request(Command::StartTimer).await
    }

    /// Stop the break timer
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn stop_timer(&self) -> AppResult<DashboardSnapshot> {
        self.request(Command::StopTimer).await
    }

    /// Toggle the break timer
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn toggle_timer(&self) -> AppResult<DashboardSnapshot> {
        self.request(Command::ToggleTimer).await
    }

    /// Push a notification
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn push_notification(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
    ) -> AppResult<Notification> {
        let (title, message) = (title.into(), message.into());
        self.request(|reply| Command::Push {
            title,
            message,
            category,
            reply,
        })
        .await
    }

    /// Dismiss a notification; `Ok(false)` if it was already gone
    ///
    /// # Errors
    ///
    /// Fails if the runtime has stopped
    pub async fn dismiss_notification(&self, id: NotificationId) -> AppResult<bool> {
        self.request(|reply| Command::Dismiss { id, reply }).await
    }
}
