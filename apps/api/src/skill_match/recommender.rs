//! Skill match recommender — the single request/response flow behind match suggestions.
//!
//! Default: `LlmSkillMatcher` (one model call under the two-field output schema).
//! `AppState` holds an `Arc<dyn SkillMatchRecommender>` so handlers never see the backend.
//!
//! The flow performs no retries, caching or fallback. Every failure is surfaced.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::skill_match::models::{skill_match_output_schema, SkillMatchRequest, SkillMatchResponse};
use crate::skill_match::prompts::{build_skill_match_prompt, skill_match_system};

#[derive(Debug, Error)]
pub enum SkillMatchError {
    /// The provider answered, but the payload does not fit the output schema.
    #[error("model output failed schema validation: {0}")]
    Validation(String),

    /// Network, authentication or provider-side failure.
    #[error("provider call failed: {0}")]
    Provider(#[source] LlmError),
}

impl From<LlmError> for SkillMatchError {
    fn from(err: LlmError) -> Self {
        if err.is_malformed_output() {
            SkillMatchError::Validation(err.to_string())
        } else {
            SkillMatchError::Provider(err)
        }
    }
}

/// Swappable recommendation backend. Carried in `AppState` as `Arc<dyn SkillMatchRecommender>`.
#[async_trait]
pub trait SkillMatchRecommender: Send + Sync {
    async fn recommend(
        &self,
        request: &SkillMatchRequest,
    ) -> Result<SkillMatchResponse, SkillMatchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillMatcher — default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillMatcher(pub LlmClient);

#[async_trait]
impl SkillMatchRecommender for LlmSkillMatcher {
    async fn recommend(
        &self,
        request: &SkillMatchRequest,
    ) -> Result<SkillMatchResponse, SkillMatchError> {
        let prompt = build_skill_match_prompt(request);
        let schema = skill_match_output_schema();

        debug!(
            teaching = request.teaching_skills.len(),
            learning = request.learning_skills.len(),
            "Requesting skill match recommendations"
        );

        let payload = self
            .0
            .call_structured(&prompt, &skill_match_system(), &schema)
            .await?;

        let response = validate_output(payload).inspect_err(|e| warn!("{e}"))?;

        debug!(
            matches = response.recommended_matches.len(),
            "Skill match recommendations received"
        );
        Ok(response)
    }
}

/// Checks a structured payload against the two-field contract and returns it
/// unchanged. A blank `reasoning` counts as missing.
pub fn validate_output(payload: Value) -> Result<SkillMatchResponse, SkillMatchError> {
    if !payload.is_object() {
        return Err(SkillMatchError::Validation(format!(
            "expected a JSON object, got {payload}"
        )));
    }

    let response: SkillMatchResponse =
        serde_json::from_value(payload).map_err(|e| SkillMatchError::Validation(e.to_string()))?;

    if response.reasoning.trim().is_empty() {
        return Err(SkillMatchError::Validation(
            "field `reasoning` is empty".to_string(),
        ));
    }

    Ok(response)
}
