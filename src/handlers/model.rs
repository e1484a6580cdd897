//! Model summary handler

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::pipeline::ModelSummary;

/// Coefficients, scaling parameters and fit statistics of the live model
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<ModelSummary>> {
    Ok(Json(state.pipeline.summary()?))
}
