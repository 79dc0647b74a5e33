// ABOUTME: Workout plan generation error surfaced to callers of the plan service
// ABOUTME: Hides upstream and parse details behind a fixed message and a coarse failure kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generation Error
//!
//! The plan service never hands raw transport or JSON errors to its callers.
//! Causes are logged where they happen; callers get a `GenerationError` whose
//! message is fixed and whose [`GenerationFailure`] kind is enough to tell the
//! three failure classes apart.

use std::fmt;

use thiserror::Error;

use super::{AppError, ErrorCode};
use crate::constants::generation::GENERATION_FAILED_USER_MESSAGE;

/// Coarse classification of a failed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The upstream call itself failed (transport, status, or empty candidate)
    Upstream,
    /// The returned text was not a JSON document of the expected shape
    MalformedResponse,
    /// The JSON parsed but violated plan invariants (e.g. blank title)
    IncompletePlan,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream => write!(f, "upstream"),
            Self::MalformedResponse => write!(f, "malformed_response"),
            Self::IncompletePlan => write!(f, "incomplete_plan"),
        }
    }
}

/// Failure to produce a valid workout plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to generate a valid workout plan.")]
pub struct GenerationError {
    kind: GenerationFailure,
}

impl GenerationError {
    /// Upstream call failed
    #[must_use]
    pub const fn upstream() -> Self {
        Self {
            kind: GenerationFailure::Upstream,
        }
    }

    /// Response was not parseable into the plan shape
    #[must_use]
    pub const fn malformed_response() -> Self {
        Self {
            kind: GenerationFailure::MalformedResponse,
        }
    }

    /// Response parsed but is not a usable plan
    #[must_use]
    pub const fn incomplete_plan() -> Self {
        Self {
            kind: GenerationFailure::IncompletePlan,
        }
    }

    /// Failure classification
    #[must_use]
    pub const fn kind(&self) -> GenerationFailure {
        self.kind
    }
}

impl From<GenerationError> for AppError {
    fn from(error: GenerationError) -> Self {
        Self::new(ErrorCode::ExternalServiceError, GENERATION_FAILED_USER_MESSAGE)
            .with_source(error)
    }
}
