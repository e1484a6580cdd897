//! New observation model (request body of the analysis route)

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pipeline::layout::FEATURE_COUNT;

pub const DEFAULT_STRESS_RISK: i32 = 3;

/// Study habits of a new student to analyze.
///
/// Every field is optional in the request body and falls back to a typical
/// student profile when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewObservation {
    #[serde(default = "default_hours_studied")]
    #[validate(range(min = 0.0, max = 24.0, message = "hours_studied must be between 0 and 24"))]
    pub hours_studied: f64,

    #[serde(default = "default_sleep_hours")]
    #[validate(range(min = 0.0, max = 24.0, message = "sleep_hours must be between 0 and 24"))]
    pub sleep_hours: f64,

    #[serde(default = "default_attendance_percent")]
    #[validate(range(min = 0.0, max = 100.0, message = "attendance_percent must be between 0 and 100"))]
    pub attendance_percent: f64,

    #[serde(default = "default_previous_scores")]
    #[validate(range(min = 0, max = 100, message = "previous_scores must be between 0 and 100"))]
    pub previous_scores: i32,

    /// 1 (low) to 5 (high)
    #[serde(default = "default_stress_risk")]
    #[validate(range(min = 1, max = 5, message = "stress_risk must be between 1 and 5"))]
    pub stress_risk: i32,
}

fn default_hours_studied() -> f64 { 5.0 }
fn default_sleep_hours() -> f64 { 7.5 }
fn default_attendance_percent() -> f64 { 85.0 }
fn default_previous_scores() -> i32 { 70 }
fn default_stress_risk() -> i32 { DEFAULT_STRESS_RISK }

impl Default for NewObservation {
    fn default() -> Self {
        Self {
            hours_studied: default_hours_studied(),
            sleep_hours: default_sleep_hours(),
            attendance_percent: default_attendance_percent(),
            previous_scores: default_previous_scores(),
            stress_risk: default_stress_risk(),
        }
    }
}

impl NewObservation {
    /// Feature vector in layout order (see `pipeline::layout::FEATURE_LAYOUT`)
    pub fn to_features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.hours_studied,
            self.sleep_hours,
            self.attendance_percent,
            self.previous_scores as f64,
            self.stress_risk as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let obs: NewObservation = serde_json::from_str(r#"{"hours_studied": 2.0}"#).unwrap();
        assert_eq!(obs.hours_studied, 2.0);
        assert_eq!(obs.sleep_hours, 7.5);
        assert_eq!(obs.attendance_percent, 85.0);
        assert_eq!(obs.previous_scores, 70);
        assert_eq!(obs.stress_risk, DEFAULT_STRESS_RISK);
    }

    #[test]
    fn test_validation_rejects_out_of_range_stress() {
        let obs = NewObservation { stress_risk: 7, ..Default::default() };
        let err = obs.validate().unwrap_err();
        assert!(err.field_errors().contains_key("stress_risk"));

        assert!(NewObservation::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_attendance_above_100() {
        let obs = NewObservation { attendance_percent: 120.0, ..Default::default() };
        assert!(obs.validate().is_err());
    }
}
