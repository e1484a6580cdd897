//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::pipeline::PipelineError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Model errors
    ModelOffline,

    // Resource errors
    NotFound(String),
    HistoricalUnavailable,

    // Validation errors
    ValidationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelOffline => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Prediction service unavailable: model is offline",
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::HistoricalUnavailable => {
                tracing::error!("Historical dataset requested but none is loaded");
                (StatusCode::INTERNAL_SERVER_ERROR, "Historical data unavailable")
            }
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::ModelOffline => AppError::ModelOffline,
            PipelineError::RecordNotFound(id) => AppError::NotFound(format!(
                "Student with ID '{}' not found in historical data",
                id
            )),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_errors_map_to_status() {
        let offline = AppError::from(PipelineError::ModelOffline).into_response();
        assert_eq!(offline.status(), StatusCode::SERVICE_UNAVAILABLE);

        let missing = AppError::from(PipelineError::RecordNotFound("S404".to_string()));
        match &missing {
            AppError::NotFound(msg) => assert!(msg.contains("'S404'")),
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        assert_eq!(
            AppError::HistoricalUnavailable.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
