//! Predictive analysis handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::{AppState, AppResult, AppError};
use crate::models::{AnalysisResponse, NewObservation, MODEL_DISCLAIMER};

/// Predict an exam score for a new student and suggest habit improvements
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<NewObservation>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    if !state.pipeline.is_ready() {
        return Err(AppError::ModelOffline);
    }

    let Json(req) = payload?;
    req.validate()?;

    let result = state.pipeline.predict(&req)?;

    tracing::debug!(
        "Analysis: predicted {} with {} suggestion(s)",
        result.predicted_score,
        result.suggestion_count
    );

    Ok(Json(AnalysisResponse {
        input: req,
        result,
        disclaimer: MODEL_DISCLAIMER,
        message: "Analysis complete. Check the prediction and the personalized suggestions.",
    }))
}
