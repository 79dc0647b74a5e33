// ABOUTME: Workout preference, plan, and exercise models for AI-generated plans
// ABOUTME: Includes the Prescription view that decides how sets, reps, and duration are displayed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    #[serde(alias = "beginner")]
    Beginner,
    /// Trains regularly
    #[serde(alias = "intermediate")]
    Intermediate,
    /// Experienced athlete
    #[serde(alias = "advanced")]
    Advanced,
}

impl FitnessLevel {
    /// Label used in prompts and UI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for one on-demand plan request
///
/// Values are forwarded to the generator verbatim. Nothing here is validated:
/// an empty equipment list or a zero duration reaches the prompt unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPreferences {
    /// Fitness level
    pub level: FitnessLevel,
    /// Primary goal, free-form (e.g. "Cardiovascular Health")
    pub goal: String,
    /// Available equipment in the order the user picked it
    pub equipment: Vec<String>,
    /// Total session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
}

impl WorkoutPreferences {
    /// Build preferences from parts
    #[must_use]
    pub fn new<I, S>(
        level: FitnessLevel,
        goal: impl Into<String>,
        equipment: I,
        duration_minutes: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level,
            goal: goal.into(),
            equipment: equipment.into_iter().map(Into::into).collect(),
            duration_minutes,
        }
    }

    /// Equipment joined the way the prompt expects ("A, B, C")
    #[must_use]
    pub fn equipment_list(&self) -> String {
        self.equipment.join(", ")
    }
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self::new(
            FitnessLevel::Beginner,
            "Cardiovascular Health",
            ["Treadmill", "Dumbbells"],
            45,
        )
    }
}

/// One exercise inside a plan section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Short description or cue
    pub description: String,
    /// Number of sets, when prescribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<NonZeroU32>,
    /// Per-set target, free text ("15", "10 each leg")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Time target, free text ("2 min", "30 sec")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Effort hint, mostly on cardio items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

impl Exercise {
    /// Exercise with only a name and description
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sets: None,
            reps: None,
            duration: None,
            intensity: None,
        }
    }

    /// Set the number of sets (zero clears it)
    #[must_use]
    pub fn with_sets(mut self, sets: u32) -> Self {
        self.sets = NonZeroU32::new(sets);
        self
    }

    /// Set the per-set repetitions
    #[must_use]
    pub fn with_reps(mut self, reps: impl Into<String>) -> Self {
        self.reps = Some(reps.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: impl Into<String>) -> Self {
        self.intensity = Some(intensity.into());
        self
    }

    /// Classify the optional sets/reps/duration fields
    #[must_use]
    pub fn prescription(&self) -> Prescription<'_> {
        let reps = self.reps.as_deref();
        match (self.sets, self.duration.as_deref()) {
            (Some(sets), Some(duration)) => Prescription::Either {
                sets,
                reps,
                duration,
            },
            (Some(sets), None) => Prescription::SetsReps { sets, reps },
            (None, Some(duration)) => Prescription::Timed { duration },
            (None, None) => Prescription::Unspecified,
        }
    }
}

/// How an exercise is dosed
///
/// Display prefers `sets × reps` whenever sets are present and falls back to
/// the duration otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prescription<'a> {
    /// Duration only
    Timed {
        /// Time target
        duration: &'a str,
    },
    /// Sets without a duration
    SetsReps {
        /// Number of sets
        sets: NonZeroU32,
        /// Per-set target, if any
        reps: Option<&'a str>,
    },
    /// Sets and a duration (e.g. "3 sets of a 30 sec plank")
    Either {
        /// Number of sets
        sets: NonZeroU32,
        /// Per-set target, if any
        reps: Option<&'a str>,
        /// Time target
        duration: &'a str,
    },
    /// Neither sets nor duration
    Unspecified,
}

impl fmt::Display for Prescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Timed { duration } => f.write_str(duration),
            Self::SetsReps {
                sets,
                reps: Some(reps),
            }
            | Self::Either {
                sets,
                reps: Some(reps),
                ..
            } => write!(f, "{sets} × {reps}"),
            Self::SetsReps { sets, reps: None } => write!(f, "{sets} sets"),
            Self::Either {
                sets,
                reps: None,
                duration,
            } => write!(f, "{sets} × {duration}"),
            Self::Unspecified => Ok(()),
        }
    }
}

/// The four sections of a plan, in session order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSection {
    /// Warm-up (5-10 minutes)
    Warmup,
    /// Cardio block
    Cardio,
    /// Strength block
    Strength,
    /// Cool-down (5 minutes)
    Cooldown,
}

impl PlanSection {
    /// All sections in session order
    pub const ALL: [Self; 4] = [Self::Warmup, Self::Cardio, Self::Strength, Self::Cooldown];

    /// JSON key of the section
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Cooldown => "cooldown",
        }
    }

    /// Human-readable heading
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Warmup => "Warm-up",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Cooldown => "Cool-down",
        }
    }
}

/// A generated four-section workout
///
/// Plans are produced wholesale and replaced on every new request; nothing
/// mutates one after it is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan title
    pub title: String,
    /// One-paragraph summary
    pub summary: String,
    /// Warm-up exercises
    pub warmup: Vec<Exercise>,
    /// Cardio exercises
    pub cardio: Vec<Exercise>,
    /// Strength exercises
    pub strength: Vec<Exercise>,
    /// Cool-down exercises
    pub cooldown: Vec<Exercise>,
}

impl WorkoutPlan {
    /// Exercises of one section
    #[must_use]
    pub fn section(&self, section: PlanSection) -> &[Exercise] {
        match section {
            PlanSection::Warmup => &self.warmup,
            PlanSection::Cardio => &self.cardio,
            PlanSection::Strength => &self.strength,
            PlanSection::Cooldown => &self.cooldown,
        }
    }

    /// Sections paired with their exercises, in session order
    pub fn sections(&self) -> impl Iterator<Item = (PlanSection, &[Exercise])> {
        PlanSection::ALL
            .into_iter()
            .map(move |section| (section, self.section(section)))
    }

    /// Total number of exercises across all sections
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.sections().map(|(_, exercises)| exercises.len()).sum()
    }

    /// Whether title and summary both carry non-blank text
    #[must_use]
    pub fn has_required_text(&self) -> bool {
        !self.title.trim().is_empty() && !self.summary.trim().is_empty()
    }
}
