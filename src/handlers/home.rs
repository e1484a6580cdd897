//! Home handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub project: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub model_status: &'static str,
    pub training_records: usize,
    pub usage: &'static str,
}

/// Service banner with model status and training record count
pub async fn index(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        project: "StudyMetrics API",
        description: "Predicts exam performance and suggests study habit improvements using a linear regression model.",
        version: env!("CARGO_PKG_VERSION"),
        model_status: model_status(state.pipeline.is_ready()),
        training_records: state.pipeline.list_historical().len(),
        usage: "POST /api/v1/analysis with a student's study habits to get a predicted score and suggestions.",
    })
}

pub fn model_status(ready: bool) -> &'static str {
    if ready { "online" } else { "offline" }
}
