use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of a user profile the matches endpoint reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills_to_teach: Vec<String>,
    #[serde(default)]
    pub skills_to_learn: Vec<String>,
}

/// A suggested peer, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub user_id: String,
    pub name: String,
    pub avatar_url: String,
    /// Skills the peer can teach the caller.
    pub common_skills_to_teach: Vec<String>,
    /// Skills the caller can teach the peer.
    pub common_skills_to_learn: Vec<String>,
    pub reasoning: String,
}

/// Where the returned matches came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Model,
    Examples,
    None,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesResponse {
    pub matches: Vec<SkillMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub source: MatchSource,
    pub generated_at: DateTime<Utc>,
}

impl MatchesResponse {
    pub fn new(matches: Vec<SkillMatch>, source: MatchSource, notice: Option<&str>) -> Self {
        Self {
            matches,
            notice: notice.map(str::to_string),
            source,
            generated_at: Utc::now(),
        }
    }
}
