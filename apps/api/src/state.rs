use std::sync::Arc;

use crate::matches::PeerDirectory;
use crate::skill_match::SkillMatchRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable recommendation backend. Default: LlmSkillMatcher.
    pub recommender: Arc<dyn SkillMatchRecommender>,
    /// Read-only peer records used for skill overlaps. Loaded once at startup.
    pub peers: Arc<PeerDirectory>,
}
