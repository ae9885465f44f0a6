pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matches::{catalog, handlers as matches_handlers};
use crate::skill_match::handlers as skill_match_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill match flow
        .route(
            "/api/v1/skill-match/recommend",
            post(skill_match_handlers::handle_recommend),
        )
        // Matches (flow + fallback + display records)
        .route("/api/v1/matches", post(matches_handlers::handle_find_matches))
        .route("/api/v1/skills", get(catalog::handle_list_skills))
        .with_state(state)
}
