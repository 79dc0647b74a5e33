// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its deployment Environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the `FitDash` server
//!
//! All configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, GeminiConfig, KeepaliveConfig, ServerConfig};
