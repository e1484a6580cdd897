//! Dataset loading
//!
//! Reads the historical CSV into `HistoricalRecord`s, in file order. Required
//! columns: `student_id`, the four measured features and `exam_score`. An
//! optional `stress_risk` column is used as-is when present; otherwise (or
//! for blank cells) the value is synthesized per row.

use std::path::Path;

use serde::Deserialize;

use super::error::TrainError;
use super::stress::{is_valid_stress, synthetic_stress_risk, STRESS_MAX, STRESS_MIN};
use crate::models::HistoricalRecord;

/// Raw CSV row before feature engineering
#[derive(Debug, Deserialize)]
struct CsvRow {
    student_id: String,
    hours_studied: f64,
    sleep_hours: f64,
    attendance_percent: f64,
    previous_scores: i32,
    exam_score: f64,
    #[serde(default)]
    stress_risk: Option<i32>,
}

/// Load records from a CSV file on disk
pub fn load_records(path: &Path, stress_seed: u64) -> Result<Vec<HistoricalRecord>, TrainError> {
    if !path.exists() {
        return Err(TrainError::DataSourceMissing { path: path.to_path_buf() });
    }

    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| TrainError::DataSourceMalformed(format!("cannot open CSV: {}", e)))?;

    read_records(reader, stress_seed)
}

/// Load records from any CSV reader (used for in-memory data)
pub fn read_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    stress_seed: u64,
) -> Result<Vec<HistoricalRecord>, TrainError> {
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;
        let row = row.map_err(|e| TrainError::DataSourceMalformed(format!("line {}: {}", line, e)))?;
        records.push(into_record(row, line, stress_seed)?);
    }

    Ok(records)
}

fn into_record(row: CsvRow, line: usize, stress_seed: u64) -> Result<HistoricalRecord, TrainError> {
    let numeric = [
        ("hours_studied", row.hours_studied),
        ("sleep_hours", row.sleep_hours),
        ("attendance_percent", row.attendance_percent),
        ("exam_score", row.exam_score),
    ];
    if let Some((name, _)) = numeric.iter().find(|(_, v)| !v.is_finite()) {
        return Err(TrainError::DataSourceMalformed(format!(
            "line {}: column '{}' is not a finite number",
            line, name
        )));
    }

    let stress_risk = match row.stress_risk {
        Some(v) if is_valid_stress(v) => v,
        Some(v) => {
            return Err(TrainError::DataSourceMalformed(format!(
                "line {}: stress_risk {} outside {}..={}",
                line, v, STRESS_MIN, STRESS_MAX
            )));
        }
        None => synthetic_stress_risk(stress_seed, &row.student_id),
    };

    Ok(HistoricalRecord {
        student_id: row.student_id,
        hours_studied: row.hours_studied,
        sleep_hours: row.sleep_hours,
        attendance_percent: row.attendance_percent,
        previous_scores: row.previous_scores,
        exam_score: row.exam_score,
        stress_risk,
    })
}
