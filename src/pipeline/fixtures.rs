//! Test datasets

use std::path::PathBuf;

use tempfile::TempDir;

pub const HEADER: &str =
    "student_id,hours_studied,sleep_hours,attendance_percent,previous_scores,exam_score";

/// (id, hours, sleep, attendance, previous, stress)
const ROWS: &[(&str, f64, f64, f64, i32, i32)] = &[
    ("S001", 2.0, 5.0, 50.0, 55, 1),
    ("S002", 3.5, 6.5, 70.0, 62, 2),
    ("S003", 5.0, 7.0, 85.0, 70, 3),
    ("S004", 6.5, 8.0, 90.0, 78, 4),
    ("S005", 8.0, 7.5, 95.0, 88, 5),
    ("S006", 4.0, 6.0, 60.0, 58, 1),
    ("S007", 7.0, 8.5, 88.0, 80, 2),
    ("S008", 1.5, 5.5, 45.0, 50, 3),
    ("S009", 9.0, 7.0, 98.0, 92, 4),
    ("S010", 5.5, 9.0, 80.0, 75, 5),
    ("S011", 3.0, 6.0, 72.0, 60, 2),
    ("S012", 6.0, 7.5, 91.0, 83, 3),
];

/// Exact linear relation used to generate labels (ignores stress)
pub fn exam_score(hours: f64, sleep: f64, attendance: f64, previous: i32) -> f64 {
    1.5 + 3.0 * hours + 1.2 * sleep + 0.25 * attendance + 0.3 * previous as f64
}

pub fn row_count() -> usize {
    ROWS.len()
}

/// CSV without a stress column (stress is synthesized on load)
pub fn csv_without_stress() -> String {
    let mut csv = format!("{}\n", HEADER);
    for &(id, h, s, a, p, _) in ROWS {
        csv.push_str(&format!("{},{},{},{},{},{}\n", id, h, s, a, p, exam_score(h, s, a, p)));
    }
    csv
}

/// CSV with an explicit stress column
pub fn csv_with_stress() -> String {
    let mut csv = format!("{},stress_risk\n", HEADER);
    for &(id, h, s, a, p, stress) in ROWS {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            id, h, s, a, p, exam_score(h, s, a, p), stress
        ));
    }
    csv
}

/// Write `contents` to a CSV inside a fresh temp dir
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("student_exam_scores.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
