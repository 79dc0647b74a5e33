// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the break timer, notification feed, plan generation, and network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Service identification
pub mod service_names {
    /// Name of the HTTP server binary and service
    pub const FITDASH_SERVER: &str = "fitdash-server";
}

/// Break timer constants
pub mod timer {
    use std::time::Duration;

    /// Length of one sitting period before a break reminder (45 minutes)
    pub const BREAK_PERIOD_SECS: u32 = 45 * 60;

    /// Interval between break timer ticks
    pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

    /// Title of the notification emitted when the break timer expires
    pub const OFFICE_BREAK_TITLE: &str = "Office Break Time!";

    /// Message of the notification emitted when the break timer expires
    pub const OFFICE_BREAK_MESSAGE: &str =
        "You've been sitting for 45 minutes. Stand up, stretch, or do 15 squats!";
}

/// Notification feed constants
pub mod notifications {
    use std::time::Duration;

    /// Maximum number of notifications held in the feed
    pub const FEED_CAPACITY: usize = 3;

    /// Lifetime of a notification before it removes itself
    pub const NOTIFICATION_TTL: Duration = Duration::from_secs(8);

    /// Title of the greeting pushed at startup
    pub const WELCOME_TITLE: &str = "Welcome back!";
}

/// Workout plan generation constants
pub mod generation {
    /// Default Gemini model for plan generation
    pub const DEFAULT_PLAN_MODEL: &str = "gemini-3-flash-preview";

    /// MIME type requested for structured plan output
    pub const JSON_MIME_TYPE: &str = "application/json";

    /// Fixed message shown to users when generation fails
    pub const GENERATION_FAILED_USER_MESSAGE: &str =
        "Failed to generate workout. Please try again.";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;

    /// Default bind address
    pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

    /// Default interval between keepalive pings (10 minutes)
    pub const DEFAULT_KEEPALIVE_INTERVAL_SECS: u64 = 10 * 60;

    /// Base URL of the Gemini REST API
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// API routes
pub mod routes {
    /// Health check route polled by the keepalive task
    pub const HEALTH: &str = "/api/health";
    /// Plan generation route
    pub const GENERATE_WORKOUT: &str = "/api/workouts/generate";
    /// Dashboard snapshot route
    pub const DASHBOARD: &str = "/api/dashboard";
}
