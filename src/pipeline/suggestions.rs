//! Habit suggestion rules
//!
//! Rules look at the observation only, never at the predicted score. All of
//! them are evaluated; output order is the rule order below.

use crate::models::NewObservation;

pub const MIN_STUDY_HOURS: f64 = 4.0;
pub const MIN_SLEEP_HOURS: f64 = 7.0;
pub const MIN_ATTENDANCE_PERCENT: f64 = 75.0;
pub const HIGH_STRESS_RISK: i32 = 4;

pub const AFFIRMATION: &str = "Your habits are exemplary! Keep it up.";

/// Suggestions triggered by an observation
pub fn suggestions_for(obs: &NewObservation) -> Vec<String> {
    let mut suggestions = Vec::new();

    if obs.hours_studied < MIN_STUDY_HOURS {
        suggestions.push(format!(
            "Your {:?} hours of study are low. Increase study time to raise the predicted score.",
            obs.hours_studied
        ));
    }

    if obs.sleep_hours < MIN_SLEEP_HOURS {
        suggestions.push(format!(
            "Sleep is compromised at {:?} hours. Aim for 7-9 hours for better cognitive performance.",
            obs.sleep_hours
        ));
    }

    if obs.attendance_percent < MIN_ATTENDANCE_PERCENT {
        suggestions.push(format!(
            "Attendance of {:?}% is a risk factor. Class attendance has a direct impact on success.",
            obs.attendance_percent
        ));
    }

    if obs.stress_risk >= HIGH_STRESS_RISK {
        suggestions.push(
            "High stress level detected. Include breaks and leisure; rest improves retention.".to_string(),
        );
    }

    if suggestions.is_empty() {
        suggestions.push(AFFIRMATION.to_string());
    }

    suggestions
}
