// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, blank handling, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use fitdash::config::{Environment, ServerConfig};
use fitdash::logging::LoggingConfig;
use serial_test::serial;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HTTP_HOST",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_API_BASE_URL",
    "APP_URL",
    "KEEPALIVE_INTERVAL_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(Environment::parse("PROD"), Environment::Production);
    assert_eq!(Environment::parse(" production "), Environment::Production);
    assert_eq!(Environment::parse("test"), Environment::Testing);
    assert_eq!(Environment::parse("staging"), Environment::Development);
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.http_host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-3-flash-preview");
    assert!(config.keepalive.app_url.is_none());
    assert_eq!(config.keepalive.interval, Duration::from_secs(600));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var("HTTP_PORT", "8088");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("GEMINI_API_KEY", "abc123");
    env::set_var("GEMINI_MODEL", "gemini-2.5-pro");
    env::set_var("APP_URL", "https://fitdash.example.com/");
    env::set_var("KEEPALIVE_INTERVAL_SECS", "30");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 8088);
    assert!(config.environment.is_production());
    assert_eq!(config.gemini.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(
        config.keepalive.app_url.as_deref(),
        Some("https://fitdash.example.com")
    );
    assert_eq!(config.keepalive.interval, Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_blank_values_count_as_unset() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "   ");
    env::set_var("APP_URL", "");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.gemini.api_key.is_none());
    assert!(config.keepalive.app_url.is_none());
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    let result = ServerConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_validate_rejects_zero_interval_and_bad_url() {
    clear_env();
    env::set_var("KEEPALIVE_INTERVAL_SECS", "0");
    let config = ServerConfig::from_env().unwrap();
    assert!(config.validate().is_err());

    env::set_var("KEEPALIVE_INTERVAL_SECS", "60");
    env::set_var("APP_URL", "ftp://fitdash.example.com");
    let config = ServerConfig::from_env().unwrap();
    clear_env();
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_summary_and_debug_hide_api_key() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "very-secret-key");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(summary.contains("Gemini API Key: Configured"));
    assert!(summary.contains("Keepalive: Disabled"));
    assert!(!summary.contains("very-secret-key"));
    assert!(!format!("{config:?}").contains("very-secret-key"));
}

#[test]
#[serial]
fn test_prod_alias_drives_server_and_logging_alike() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "fitdash=trace");
    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    let logging = LoggingConfig::for_server(&config);
    assert_eq!(logging.environment, Environment::Production);
    assert!(logging.include_location);
    assert!(logging.include_spans);
    assert_eq!(logging.level, "fitdash=trace");
}

#[test]
#[serial]
fn test_development_logging_omits_locations_by_default() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();
    let logging = LoggingConfig::for_server(&config);

    assert_eq!(logging.environment, Environment::Development);
    assert!(!logging.include_location);
    assert_eq!(logging.level, "info");
}
