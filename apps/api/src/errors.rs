use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::grammar::engine::EngineError;
use crate::llm_client::LlmError;

/// Application-level error type shared by both services.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure maps to a non-2xx status. Server-side failures are logged with
/// their detail and answered with a generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::EngineUnavailable(msg) => {
                tracing::warn!("Engine unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "ENGINE_UNAVAILABLE",
                    "The analysis engine is not available".to_string(),
                )
            }
            AppError::AnalysisFailed(msg) => {
                tracing::error!("Analysis failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_FAILED",
                    "Analysis failed".to_string(),
                )
            }
            AppError::Parse(msg) => {
                tracing::error!("Parse error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARSE_ERROR",
                    "The analysis response could not be parsed".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
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

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unavailable => {
                AppError::EngineUnavailable("grammar engine failed to initialize".to_string())
            }
            other => AppError::AnalysisFailed(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Unavailable => {
                AppError::EngineUnavailable("completion client is not configured".to_string())
            }
            LlmError::Parse(e) => AppError::Parse(e.to_string()),
            other => AppError::Llm(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping_is_consistent() {
        assert_eq!(status_of(AppError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::EngineUnavailable("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(AppError::AnalysisFailed("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(AppError::Parse("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of(AppError::Llm("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_llm_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(LlmError::Unavailable),
            AppError::EngineUnavailable(_)
        ));
        assert!(matches!(AppError::from(LlmError::EmptyContent), AppError::Llm(_)));
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(AppError::from(LlmError::Parse(parse)), AppError::Parse(_)));
    }

    #[test]
    fn test_engine_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(EngineError::Unavailable),
            AppError::EngineUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(EngineError::Api {
                status: 500,
                message: "boom".into()
            }),
            AppError::AnalysisFailed(_)
        ));
    }
}
