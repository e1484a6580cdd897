//! Predictive scoring pipeline
//!
//! Training runs once at startup: load the CSV, add the stress feature, fit a
//! standard scaler and an OLS regression on the scaled features. The result is
//! an immutable `Pipeline` shared by all request handlers.
//!
//! ```text
//! CSV ──► HistoricalRecord[] ──► X (n x 5) ──► StandardScaler ──► LinearRegression
//!                │                                   │                  │
//!                └── list / find                     └──── FittedModel ─┘
//! ```
//!
//! Scaler and regression only exist together inside `FittedModel`, so the
//! pipeline is either fully ready or offline.

pub mod dataset;
pub mod error;
pub mod layout;
pub mod regression;
pub mod scaler;
pub mod stress;
pub mod suggestions;

#[cfg(test)]
pub(crate) mod fixtures;

use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::{Array1, Array2};
use serde::Serialize;

pub use error::{PipelineError, TrainError};
use layout::{record_features, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT};
use regression::LinearRegression;
use scaler::StandardScaler;

use crate::models::{HistoricalRecord, NewObservation, PredictionResult};

// ============================================================================
// FITTED MODEL
// ============================================================================

/// Scaling and model parameters, always created together
#[derive(Debug, Clone)]
pub struct FittedModel {
    scaler: StandardScaler,
    regression: LinearRegression,
    training_samples: usize,
    r_squared: f64,
    trained_at: DateTime<Utc>,
}

impl FittedModel {
    /// Unrounded score for a raw feature vector in layout order
    pub fn score(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let raw = Array1::from_iter(features.iter().copied());
        let scaled = self.scaler.transform_row(raw.view());
        self.regression.predict_row(scaled.view())
    }

    pub fn summary(&self) -> ModelSummary {
        let features = FEATURE_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, name)| FeatureSummary {
                name: name.to_string(),
                coefficient: self.regression.coefficients()[i],
                mean: self.scaler.mean()[i],
                std: self.scaler.std()[i],
            })
            .collect();

        ModelSummary {
            layout: LayoutInfo::current(),
            features,
            intercept: self.regression.intercept(),
            training_samples: self.training_samples,
            r_squared: self.r_squared,
            trained_at: self.trained_at,
        }
    }
}

/// Read-only view of a fitted model
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub layout: LayoutInfo,
    pub features: Vec<FeatureSummary>,
    pub intercept: f64,
    pub training_samples: usize,
    pub r_squared: f64,
    pub trained_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub name: String,
    pub coefficient: f64,
    pub mean: f64,
    pub std: f64,
}

/// Fit scaler and regression on historical records
pub fn fit(records: &[HistoricalRecord]) -> Result<FittedModel, TrainError> {
    if records.is_empty() {
        return Err(TrainError::DataSourceMalformed("dataset has no rows".to_string()));
    }

    let x = Array2::from_shape_vec(
        (records.len(), FEATURE_COUNT),
        records.iter().flat_map(record_features).collect(),
    )
    .map_err(|e| TrainError::DataSourceMalformed(format!("feature matrix: {}", e)))?;
    let y: Array1<f64> = records.iter().map(|r| r.exam_score).collect();

    let scaler = StandardScaler::fit(&x)
        .ok_or_else(|| TrainError::DataSourceMalformed("dataset has no rows".to_string()))?;
    let x_scaled = scaler.transform(&x);

    let regression = LinearRegression::fit(&x_scaled, &y)
        .map_err(|e| TrainError::DataSourceMalformed(e.to_string()))?;
    let r_squared = regression.r_squared(&x_scaled, &y);

    Ok(FittedModel {
        scaler,
        regression,
        training_samples: records.len(),
        r_squared,
        trained_at: Utc::now(),
    })
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Either both parameter sets are present, or the reason they are not
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(FittedModel),
    Offline(TrainError),
}

/// Historical records plus the model trained on them
#[derive(Debug, Clone)]
pub struct Pipeline {
    records: Vec<HistoricalRecord>,
    state: ModelState,
}

impl Pipeline {
    /// Load the dataset at `path` and fit.
    ///
    /// Never fails: a missing or malformed dataset leaves the pipeline offline
    /// for the rest of the process, with the cause kept in `ModelState::Offline`.
    pub fn train(path: &Path, stress_seed: u64) -> Self {
        tracing::info!("Loading training data from {}", path.display());

        match dataset::load_records(path, stress_seed) {
            Ok(records) => Self::from_records(records),
            Err(e) => Self::offline(Vec::new(), e),
        }
    }

    /// Fit on records that are already in memory
    pub fn from_records(records: Vec<HistoricalRecord>) -> Self {
        match fit(&records) {
            Ok(model) => {
                tracing::info!(
                    "Linear regression trained on {} records (R² = {:.4}). Prediction service ready.",
                    model.training_samples,
                    model.r_squared
                );
                Self { records, state: ModelState::Ready(model) }
            }
            Err(e) => Self::offline(records, e),
        }
    }

    fn offline(records: Vec<HistoricalRecord>, reason: TrainError) -> Self {
        match &reason {
            TrainError::DataSourceMissing { path } => tracing::error!(
                "Training data '{}' not found. API will run without predictive analysis.",
                path.display()
            ),
            TrainError::DataSourceMalformed(msg) => tracing::error!(
                "Unexpected error during model setup: {}. API will run without predictive analysis.",
                msg
            ),
        }
        Self { records, state: ModelState::Offline(reason) }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    pub fn model(&self) -> Option<&FittedModel> {
        match &self.state {
            ModelState::Ready(model) => Some(model),
            ModelState::Offline(_) => None,
        }
    }

    pub fn offline_reason(&self) -> Option<&TrainError> {
        match &self.state {
            ModelState::Ready(_) => None,
            ModelState::Offline(reason) => Some(reason),
        }
    }

    /// Predict a score (rounded to 2 decimals) and derive habit suggestions
    pub fn predict(&self, observation: &NewObservation) -> Result<PredictionResult, PipelineError> {
        let model = self.model().ok_or(PipelineError::ModelOffline)?;

        let score = model.score(&observation.to_features());
        let suggestions = suggestions::suggestions_for(observation);

        Ok(PredictionResult::new(round2(score), suggestions))
    }

    pub fn summary(&self) -> Result<ModelSummary, PipelineError> {
        self.model()
            .map(FittedModel::summary)
            .ok_or(PipelineError::ModelOffline)
    }

    /// All records, in file order
    pub fn list_historical(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// First record whose id matches, ignoring case
    pub fn find_historical(&self, student_id: &str) -> Result<&HistoricalRecord, PipelineError> {
        self.records
            .iter()
            .find(|r| r.matches_id(student_id))
            .ok_or_else(|| PipelineError::RecordNotFound(student_id.to_string()))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
