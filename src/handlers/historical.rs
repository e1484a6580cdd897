//! Historical records handlers

use axum::{extract::{State, Path}, Json};

use crate::{AppState, AppResult, AppError};
use crate::models::HistoricalRecord;

/// List the full training dataset, in file order
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HistoricalRecord>>> {
    let records = state.pipeline.list_historical();

    if records.is_empty() {
        return Err(AppError::HistoricalUnavailable);
    }

    Ok(Json(records.to_vec()))
}

/// Get a single record by student id (case-insensitive)
pub async fn get(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<HistoricalRecord>> {
    let record = state.pipeline.find_historical(&student_id)?;
    Ok(Json(record.clone()))
}
