// ABOUTME: Prompt text and response schema for workout plan generation
// ABOUTME: Builds the ChatRequest that asks the model for a four-section plan as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitdash_core::models::WorkoutPreferences;
use serde_json::{json, Value};

use crate::llm::{ChatMessage, ChatRequest, ResponseFormat};

/// Natural-language instruction embedding the four preferences verbatim
#[must_use]
pub fn build_prompt(preferences: &WorkoutPreferences) -> String {
    format!(
        "Generate a personalized daily workout plan for a user with the following profile:
  - Fitness Level: {level}
  - Primary Goal: {goal}
  - Available Equipment: {equipment}
  - Total Workout Duration: {duration} minutes

  The plan must include:
  1. A warm-up (5-10 mins)
  2. A cardio section
  3. A strength section (using available equipment)
  4. A cool-down (5 mins)

  Specify sets, reps, and duration for each exercise where applicable.
  Return the response in a structured JSON format.",
        level = preferences.level,
        goal = preferences.goal,
        equipment = preferences.equipment_list(),
        duration = preferences.duration_minutes,
    )
}

fn exercise_schema(extra: &[(&str, &str)]) -> Value {
    let mut properties = json!({
        "name": { "type": "STRING" },
        "description": { "type": "STRING" },
    });
    if let Some(map) = properties.as_object_mut() {
        for (field, kind) in extra {
            map.insert((*field).to_owned(), json!({ "type": kind }));
        }
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": ["name", "description"],
    })
}

/// Output schema in Gemini's schema dialect
#[must_use]
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "warmup": {
                "type": "ARRAY",
                "items": exercise_schema(&[("duration", "STRING")]),
            },
            "cardio": {
                "type": "ARRAY",
                "items": exercise_schema(&[("duration", "STRING"), ("intensity", "STRING")]),
            },
            "strength": {
                "type": "ARRAY",
                "items": exercise_schema(&[("sets", "INTEGER"), ("reps", "STRING")]),
            },
            "cooldown": {
                "type": "ARRAY",
                "items": exercise_schema(&[("duration", "STRING")]),
            },
        },
        "required": ["title", "summary", "warmup", "cardio", "strength", "cooldown"],
    })
}

/// Complete request for one plan: prompt, JSON output, schema, model
#[must_use]
pub fn build_plan_request(preferences: &WorkoutPreferences, model: &str) -> ChatRequest {
    ChatRequest::new(vec![ChatMessage::user(build_prompt(preferences))])
        .with_model(model)
        .with_response_format(ResponseFormat::json_with_schema(plan_response_schema()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitdash_core::models::FitnessLevel;

    #[test]
    fn test_prompt_embeds_preferences_verbatim() {
        let prompt = build_prompt(&WorkoutPreferences::default());
        assert!(prompt.contains("Fitness Level: Beginner"));
        assert!(prompt.contains("Primary Goal: Cardiovascular Health"));
        assert!(prompt.contains("Available Equipment: Treadmill, Dumbbells"));
        assert!(prompt.contains("Total Workout Duration: 45 minutes"));
        assert!(prompt.contains("A cool-down (5 mins)"));
    }

    #[test]
    fn test_prompt_accepts_degenerate_preferences() {
        let prefs = WorkoutPreferences::new(FitnessLevel::Advanced, "", Vec::<String>::new(), 0);
        let prompt = build_prompt(&prefs);
        assert!(prompt.contains("Available Equipment: \n"));
        assert!(prompt.contains("Total Workout Duration: 0 minutes"));
    }

    #[test]
    fn test_schema_requires_all_sections() {
        let schema = plan_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            required,
            ["title", "summary", "warmup", "cardio", "strength", "cooldown"]
        );
        assert_eq!(
            schema["properties"]["strength"]["items"]["properties"]["sets"]["type"],
            "INTEGER"
        );
        assert_eq!(
            schema["properties"]["cardio"]["items"]["required"],
            json!(["name", "description"])
        );
    }

    #[test]
    fn test_plan_request_asks_for_json() {
        let request = build_plan_request(&WorkoutPreferences::default(), "gemini-3-flash-preview");
        let format = request.response_format.unwrap();
        assert_eq!(format.mime_type, "application/json");
        assert_eq!(format.schema, Some(plan_response_schema()));
        assert_eq!(request.messages.len(), 1);
    }
}
