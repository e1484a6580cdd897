//! Prediction result model

use serde::{Deserialize, Serialize};

use super::NewObservation;

/// Fixed notice attached to every analysis response
pub const MODEL_DISCLAIMER: &str =
    "The prediction comes from a linear regression. It is a trend, not a certainty.";

/// Outcome of one inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_score: f64,
    pub suggestion_count: usize,
    pub suggestions: Vec<String>,
}

impl PredictionResult {
    pub fn new(predicted_score: f64, suggestions: Vec<String>) -> Self {
        Self {
            predicted_score,
            suggestion_count: suggestions.len(),
            suggestions,
        }
    }
}

/// Response body of `POST /api/v1/analysis`
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub input: NewObservation,
    pub result: PredictionResult,
    pub disclaimer: &'static str,
    pub message: &'static str,
}
