// ABOUTME: Bounded most-recent-first notification feed
// ABOUTME: Pushing beyond capacity evicts the oldest entries; dismissal by id is idempotent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;

use fitdash_core::constants::notifications::FEED_CAPACITY;
use fitdash_core::models::{Notification, NotificationId};

/// Ordered notification list, newest first
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationFeed {
    /// Feed holding at most `FEED_CAPACITY` entries
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }

    /// Feed with a custom bound (at least one)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend `notification`, returning whatever fell off the end
    pub fn push(&mut self, notification: Notification) -> Vec<Notification> {
        self.entries.push_front(notification);
        let overflow = self.entries.len().saturating_sub(self.capacity);
        self.entries.split_off(self.entries.len() - overflow).into()
    }

    /// Remove the entry with `id`, if present
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        self.entries.remove(index)
    }

    /// Whether an entry with `id` is present
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fitdash_core::models::NotificationCategory;

    fn note(title: &str) -> Notification {
        Notification::new(title, "msg", NotificationCategory::Walk, Utc::now())
    }

    #[test]
    fn test_push_keeps_three_most_recent() {
        let mut feed = NotificationFeed::new();
        let mut evicted = Vec::new();
        for title in ["n1", "n2", "n3", "n4", "n5"] {
            evicted.extend(feed.push(note(title)));
        }
        let titles: Vec<&str> = feed.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n5", "n4", "n3"]);
        let dropped: Vec<&str> = evicted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(dropped, ["n1", "n2"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut feed = NotificationFeed::new();
        let first = note("a");
        let id = first.id;
        feed.push(first);
        feed.push(note("b"));

        assert!(feed.dismiss(id).is_some());
        assert!(feed.dismiss(id).is_none());
        assert!(feed.dismiss(NotificationId::new()).is_none());
        assert_eq!(feed.len(), 1);
        assert!(!feed.contains(id));
    }
}
