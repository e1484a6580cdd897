//! Feature Layout - Centralized Feature Definition
//!
//! The scaler and the regression are column-positional: the training matrix
//! and every inference vector MUST be assembled in this order. Reordering
//! produces wrong predictions without any error.

use serde::{Deserialize, Serialize};

use crate::models::HistoricalRecord;

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "hours_studied",      // 0
    "sleep_hours",        // 1
    "attendance_percent", // 2
    "previous_scores",    // 3
    "stress_risk",        // 4
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 5;

/// Label column
pub const TARGET: &str = "exam_score";

/// Training row in layout order
pub fn record_features(record: &HistoricalRecord) -> [f64; FEATURE_COUNT] {
    [
        record.hours_studied,
        record.sleep_hours,
        record.attendance_percent,
        record.previous_scores as f64,
        record.stress_risk as f64,
    ]
}

/// Layout information for the model summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub feature_count: usize,
    pub feature_names: Vec<String>,
    pub target: String,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            target: TARGET.to_string(),
        }
    }
}
