//! Axum route handlers for the Skill Match API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::skill_match::models::{SkillMatchRequest, SkillMatchResponse};
use crate::state::AppState;

/// POST /api/v1/skill-match/recommend
///
/// Runs the recommendation flow once and returns the model's structured answer.
/// Empty skill lists and blank entries are allowed; failures are surfaced
/// without fallback.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<SkillMatchRequest>,
) -> Result<Json<SkillMatchResponse>, AppError> {
    let response = state.recommender.recommend(&request).await?;
    Ok(Json(response))
}
