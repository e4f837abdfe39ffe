//! Student roster text formats.
//!
//! The roster CSV is `student_id,full_name,email,program,year` with a header
//! row. Bulk entry uses the same columns without a header. Fields are split
//! on plain commas; quoting is not supported.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::requests::StudentCreate;

pub const CSV_HEADER: &str = "student_id,full_name,email,program,year";

/// Valid academic years.
pub const YEAR_RANGE: RangeInclusive<u32> = 1..=10;

/// Example roster offered to admins as a starting template.
pub const SAMPLE_CSV: &str = "student_id,full_name,email,program,year
ST001,John Doe,john.doe@university.edu,Computer Science,2
ST002,Jane Smith,jane.smith@university.edu,Mathematics,3
ST003,Mike Johnson,mike.johnson@university.edu,Physics,1
ST004,Sarah Wilson,sarah.wilson@university.edu,Chemistry,4";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Outcome of checking a roster CSV before upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub valid_rows: usize,
    pub total_rows: usize,
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim().lines().map(|line| line.trim_end_matches('\r'))
}

fn columns(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn non_empty(value: Option<&&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| (*v).to_string())
}

fn row_error(columns: &[&str]) -> Option<&'static str> {
    if columns.len() < 2 {
        return Some("Missing required columns (student_id and full_name)");
    }
    if columns[0].is_empty() {
        return Some("Student ID is required");
    }
    if columns[1].is_empty() {
        return Some("Full name is required");
    }
    if let Some(email) = columns.get(2)
        && !email.is_empty()
        && !is_valid_email(email)
    {
        return Some("Invalid email format");
    }
    if let Some(year) = columns.get(4)
        && !year.is_empty()
        && !year.parse::<u32>().is_ok_and(|y| YEAR_RANGE.contains(&y))
    {
        return Some("Year must be a number between 1 and 10");
    }
    None
}

/// Check every data row of a roster CSV. Row numbers are 1-based file lines,
/// so the first data row is row 2.
#[must_use]
pub fn validate_csv(text: &str) -> CsvReport {
    if text.trim().is_empty() {
        return CsvReport {
            is_valid: false,
            errors: vec!["CSV file is empty".to_string()],
            valid_rows: 0,
            total_rows: 0,
        };
    }

    let mut errors = Vec::new();
    let mut valid_rows = 0;
    let mut total_rows = 0;

    for (index, line) in lines(text).skip(1).enumerate() {
        total_rows += 1;
        match row_error(&columns(line)) {
            Some(reason) => errors.push(format!("Row {}: {reason}", index + 2)),
            None => valid_rows += 1,
        }
    }

    CsvReport {
        is_valid: errors.is_empty(),
        errors,
        valid_rows,
        total_rows,
    }
}

fn student_from_columns(columns: &[&str]) -> StudentCreate {
    StudentCreate {
        student_id: columns[0].to_string(),
        full_name: columns[1].to_string(),
        email: non_empty(columns.get(2)),
        program: non_empty(columns.get(3)),
        year: columns.get(4).and_then(|y| y.parse().ok()),
    }
}

/// Parse the data rows of a roster CSV, dropping rows without an id or name.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<StudentCreate> {
    lines(text)
        .skip(1)
        .map(columns)
        .filter(|cols| cols.len() >= 2)
        .map(|cols| student_from_columns(&cols))
        .filter(|s| !s.student_id.is_empty() && !s.full_name.is_empty())
        .collect()
}

/// Parse header-less bulk entry text. Lines with fewer than two columns are skipped.
#[must_use]
pub fn parse_bulk_lines(text: &str) -> Vec<StudentCreate> {
    lines(text)
        .map(columns)
        .filter(|cols| cols.len() >= 2)
        .map(|cols| student_from_columns(&cols))
        .collect()
}
