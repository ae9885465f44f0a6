use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::llm_client::OutputSchema;

/// Input to the recommendation flow. Built fresh per call from the caller's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchRequest {
    #[serde(default)]
    pub teaching_skills: Vec<String>,
    #[serde(default)]
    pub learning_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<String>,
}

/// Structured model output. Both fields are required when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatchResponse {
    pub recommended_matches: Vec<String>,
    pub reasoning: String,
}

pub const SKILL_MATCH_TOOL_NAME: &str = "record_skill_matches";

/// The two-field output contract submitted to the provider with every call.
pub fn skill_match_output_schema() -> OutputSchema {
    OutputSchema {
        name: SKILL_MATCH_TOOL_NAME,
        description: "Record the recommended peer matches and the reasoning behind them.",
        input_schema: output_json_schema(),
    }
}

fn output_json_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recommendedMatches": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of recommended student profiles for skill matching."
            },
            "reasoning": {
                "type": "string",
                "description": "Reasoning for the recommendations."
            }
        },
        "required": ["recommendedMatches", "reasoning"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_and_optional_profile() {
        let req: SkillMatchRequest = serde_json::from_str(
            r#"{"teachingSkills": ["Python"], "learningSkills": ["Go"]}"#,
        )
        .unwrap();
        assert_eq!(req.teaching_skills, vec!["Python"]);
        assert_eq!(req.learning_skills, vec!["Go"]);
        assert!(req.student_profile.is_none());
    }

    #[test]
    fn test_request_skill_lists_default_to_empty() {
        let req: SkillMatchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, SkillMatchRequest::default());
    }

    #[test]
    fn test_response_requires_reasoning() {
        let err = serde_json::from_str::<SkillMatchResponse>(r#"{"recommendedMatches": []}"#)
            .unwrap_err();
        assert!(err.to_string().contains("reasoning"));
    }

    #[test]
    fn test_response_rejects_non_string_matches() {
        assert!(serde_json::from_str::<SkillMatchResponse>(
            r#"{"recommendedMatches": [1, 2], "reasoning": "r"}"#
        )
        .is_err());
    }

    #[test]
    fn test_schema_declares_both_fields_required() {
        let schema = skill_match_output_schema();
        assert_eq!(schema.name, SKILL_MATCH_TOOL_NAME);
        assert_eq!(
            schema.input_schema["required"],
            json!(["recommendedMatches", "reasoning"])
        );
        assert_eq!(
            schema.input_schema["properties"]["recommendedMatches"]["items"]["type"],
            "string"
        );
    }
}
