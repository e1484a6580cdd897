//! Historical record model

use serde::{Deserialize, Serialize};

/// One row of the training dataset, as served by the historical routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub student_id: String,
    pub hours_studied: f64,
    pub sleep_hours: f64,
    pub attendance_percent: f64,
    pub previous_scores: i32,
    pub exam_score: f64,
    /// 1 (low) to 5 (high)
    pub stress_risk: i32,
}

impl HistoricalRecord {
    /// Case-insensitive exact match on the student identifier
    pub fn matches_id(&self, student_id: &str) -> bool {
        self.student_id.to_uppercase() == student_id.to_uppercase()
    }
}
