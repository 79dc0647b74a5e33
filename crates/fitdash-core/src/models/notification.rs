// ABOUTME: Transient dashboard notification model with stable identity
// ABOUTME: Notifications are keyed by a UUID so dismissal and expiry are robust to reordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique notification identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a notification is about; drives the icon a client shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    /// Workout related (plan ready, welcome)
    Workout,
    /// Office break reminders
    Office,
    /// Diet and hydration
    Diet,
    /// Walk reminders
    Walk,
}

/// A short-lived message in the dashboard feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identity used for dismissal and expiry
    pub id: NotificationId,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Category
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    /// When the notification was created
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// New notification with a fresh id
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            category,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn test_notification_serializes_category_as_type() {
        let note = Notification::new("Hydrate", "Drink water", NotificationCategory::Diet, Utc::now());
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "diet");
        assert_eq!(json["id"], note.id.to_string());
    }
}
