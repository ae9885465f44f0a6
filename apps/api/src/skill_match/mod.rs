// Skill match recommendation flow.
// Builds the prompt, calls the model under a fixed output schema, validates the result.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod recommender;

pub use models::{SkillMatchRequest, SkillMatchResponse};
pub use recommender::{LlmSkillMatcher, SkillMatchError, SkillMatchRecommender};
