use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::gateway::GenerationError;
use crate::models::section::SectionId;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is local to one request; none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required field missing or malformed. Rejected before anything is merged.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The text generation service failed, timed out, or answered with an unexpected shape.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// The service answered but the text was empty or unusable for the section.
    #[error("Malformed generation for section {section}")]
    MalformedGeneration { section: SectionId },

    /// A generation for this section has not resolved yet.
    #[error("Generation already in progress for section {0}")]
    GenerationInFlight(SectionId),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(e) => {
                tracing::warn!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "failed to generate".to_string(),
                )
            }
            AppError::MalformedGeneration { section } => {
                tracing::warn!("Malformed generation for {section}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MALFORMED_GENERATION",
                    "failed to save".to_string(),
                )
            }
            AppError::GenerationInFlight(section) => (
                StatusCode::CONFLICT,
                "GENERATION_IN_PROGRESS",
                format!("content for {section} is still being generated"),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
    fn test_generation_error_hides_transport_detail() {
        let err = AppError::Generation(GenerationError::Service {
            section: SectionId::Projects,
            source: LlmError::Api {
                status: 503,
                message: "backend pool exhausted at 10.0.0.7".to_string(),
            },
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_status_codes_per_variant() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::MalformedGeneration {
                    section: SectionId::Skills,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::GenerationInFlight(SectionId::Skills),
                StatusCode::CONFLICT,
            ),
            (AppError::NotFound("w".into()), StatusCode::NOT_FOUND),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
