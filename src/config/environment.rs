// ABOUTME: Environment-driven server configuration for the FitDash backend
// ABOUTME: Loads HTTP, Gemini, and keepalive settings from env vars with an optional .env file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{anyhow, Result};
use fitdash_core::constants::generation::DEFAULT_PLAN_MODEL;
use fitdash_core::constants::network::{
    DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_KEEPALIVE_INTERVAL_SECS, GEMINI_API_BASE_URL,
};
use tracing::{info, warn};

/// Deployment environment, parsed once from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development (anything unrecognized)
    #[default]
    Development,
    /// `production` or `prod`
    Production,
    /// `testing` or `test`
    Testing,
}

impl Environment {
    /// Parse a variable value; unknown values fall back to development
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gemini API settings
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; plan generation fails upstream when absent
    pub api_key: Option<String>,
    /// Model used for plan generation
    pub model: String,
    /// REST API base URL
    pub base_url: String,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Self-ping settings
#[derive(Debug, Clone)]
pub struct KeepaliveConfig {
    /// Public base URL of this deployment; keepalive is disabled when absent
    pub app_url: Option<String>,
    /// Interval between pings
    pub interval: Duration,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Bind address
    pub http_host: String,
    /// Deployment environment
    pub environment: Environment,
    /// `RUST_LOG` filter: a bare level or full directives
    pub log_level: String,
    /// Gemini settings
    pub gemini: GeminiConfig,
    /// Keepalive settings
    pub keepalive: KeepaliveConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let keepalive_secs: u64 = env_var_or(
            "KEEPALIVE_INTERVAL_SECS",
            &DEFAULT_KEEPALIVE_INTERVAL_SECS.to_string(),
        )
        .parse()
        .map_err(|e| anyhow!("Invalid KEEPALIVE_INTERVAL_SECS: {e}"))?;

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .map_err(|e| anyhow!("Invalid HTTP_PORT: {e}"))?,
            http_host: env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST),
            environment: Environment::parse(&env_var_or("ENVIRONMENT", "development")),
            log_level: non_empty_var("RUST_LOG").unwrap_or_else(|| "info".to_owned()),
            gemini: GeminiConfig {
                api_key: non_empty_var("GEMINI_API_KEY"),
                model: env_var_or("GEMINI_MODEL", DEFAULT_PLAN_MODEL),
                base_url: env_var_or("GEMINI_API_BASE_URL", GEMINI_API_BASE_URL),
            },
            keepalive: KeepaliveConfig {
                app_url: non_empty_var("APP_URL").map(|url| url.trim_end_matches('/').to_owned()),
                interval: Duration::from_secs(keepalive_secs),
            },
        };

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error on a zero keepalive interval or an invalid app URL
    pub fn validate(&self) -> Result<()> {
        if self.keepalive.interval.is_zero() {
            return Err(anyhow!("KEEPALIVE_INTERVAL_SECS must be greater than zero"));
        }

        if let Some(url) = &self.keepalive.app_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("APP_URL must be an http(s) URL, got '{url}'"));
            }
        }

        if self.gemini.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; workout generation requests will fail");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitDash Server Configuration:\n\
             - HTTP: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Gemini Model: {}\n\
             - Gemini API Key: {}\n\
             - Keepalive: {}",
            self.http_host,
            self.http_port,
            self.environment,
            self.log_level,
            self.gemini.model,
            if self.gemini.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.keepalive.app_url.as_ref().map_or_else(
                || "Disabled".to_owned(),
                |url| format!("{url} every {}s", self.keepalive.interval.as_secs())
            ),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get environment variable, treating blank values as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
