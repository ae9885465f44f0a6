use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::skill_match::SkillMatchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Model output error: {0}")]
    ModelOutput(String),
}

impl From<SkillMatchError> for AppError {
    fn from(err: SkillMatchError) -> Self {
        match err {
            SkillMatchError::Validation(msg) => AppError::ModelOutput(msg),
            SkillMatchError::Provider(e) => AppError::Llm(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::ModelOutput(msg) => {
                tracing::error!("Model output rejected: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_OUTPUT_ERROR",
                    "The AI model returned an unusable response".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_schema_failure_maps_to_bad_gateway() {
        let err: AppError = SkillMatchError::Validation("missing field `reasoning`".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_provider_failure_maps_to_internal_error() {
        let err: AppError = SkillMatchError::Provider(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".into(),
        })
        .into();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("401")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation("name cannot be empty".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
