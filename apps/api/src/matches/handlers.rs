//! Axum route handlers for the Matches API.

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matches::catalog::example_matches;
use crate::matches::decorate::decorate_matches;
use crate::matches::directory::PeerDirectory;
use crate::matches::models::{MatchSource, MatchesRequest, MatchesResponse};
use crate::skill_match::{SkillMatchRecommender, SkillMatchRequest};
use crate::state::AppState;

const NO_SKILLS_NOTICE: &str = "Add skills to your profile to discover potential matches!";
const PROVIDER_FAILED_NOTICE: &str =
    "Could not fetch recommendations at this time. Showing examples.";
const NO_MATCHES_NOTICE: &str = "We couldn't find specific matches right now, showing general \
    examples. Try refining your skills!";

/// POST /api/v1/matches
///
/// Runs the recommendation flow for a profile and returns display-ready matches.
/// Falls back to example matches when the model fails or finds nobody.
pub async fn handle_find_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchesRequest>,
) -> Result<Json<MatchesResponse>, AppError> {
    reject_blank_skills(&request.skills_to_teach, "skillsToTeach")?;
    reject_blank_skills(&request.skills_to_learn, "skillsToLearn")?;

    let response = find_matches(state.recommender.as_ref(), &state.peers, &request).await;
    Ok(Json(response))
}

/// Skill lists may be empty, but every listed skill must name something.
fn reject_blank_skills(skills: &[String], field: &str) -> Result<(), AppError> {
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "{field} cannot contain blank entries"
        )));
    }
    Ok(())
}

/// Caller-side wrapper around the recommendation flow. Never fails: every
/// outcome maps to a response with a `source` and an optional notice.
pub async fn find_matches(
    recommender: &dyn SkillMatchRecommender,
    peers: &PeerDirectory,
    request: &MatchesRequest,
) -> MatchesResponse {
    if request.skills_to_teach.is_empty() && request.skills_to_learn.is_empty() {
        return MatchesResponse::new(Vec::new(), MatchSource::None, Some(NO_SKILLS_NOTICE));
    }

    let flow_request = SkillMatchRequest {
        teaching_skills: request.skills_to_teach.clone(),
        learning_skills: request.skills_to_learn.clone(),
        student_profile: request.bio.clone(),
    };

    let response = match recommender.recommend(&flow_request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to fetch recommendations: {e}");
            return MatchesResponse::new(
                example_matches(),
                MatchSource::Examples,
                Some(PROVIDER_FAILED_NOTICE),
            );
        }
    };

    let matches = decorate_matches(request, &response, peers);
    if matches.is_empty() {
        return MatchesResponse::new(
            example_matches(),
            MatchSource::Examples,
            Some(NO_MATCHES_NOTICE),
        );
    }

    info!("Returning {} model-suggested matches", matches.len());
    MatchesResponse::new(matches, MatchSource::Model, None)
}
