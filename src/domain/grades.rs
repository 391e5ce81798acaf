use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub name: String,
    pub score: i32,
}

impl GradeRecord {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub count: usize,
    pub sum: i64,
    pub average: f64,
    pub highest: i32,
    pub lowest: i32,
}

/// Aggregate scores in a single pass.
pub fn summarize(records: &[GradeRecord]) -> Result<GradeSummary, GradeError> {
    let (first, rest) = records.split_first().ok_or(GradeError::NoStudents)?;

    let mut sum = i64::from(first.score);
    let mut highest = first.score;
    let mut lowest = first.score;
    for record in rest {
        sum += i64::from(record.score);
        highest = highest.max(record.score);
        lowest = lowest.min(record.score);
    }

    Ok(GradeSummary {
        count: records.len(),
        sum,
        average: sum as f64 / records.len() as f64,
        highest,
        lowest,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    NoStudents,
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::NoStudents => write!(f, "No students to report on"),
        }
    }
}

impl std::error::Error for GradeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let records = vec![
            GradeRecord::new("Ann", 90),
            GradeRecord::new("Ben", 80),
            GradeRecord::new("Cid", 70),
        ];
        let summary = summarize(&records).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.sum, 240);
        assert_eq!(summary.average, 80.0);
        assert_eq!(summary.highest, 90);
        assert_eq!(summary.lowest, 70);
    }

    #[test]
    fn test_single_student() {
        let summary = summarize(&[GradeRecord::new("Solo", -5)]).unwrap();
        assert_eq!(summary.highest, -5);
        assert_eq!(summary.lowest, -5);
        assert_eq!(summary.average, -5.0);
    }

    #[test]
    fn test_empty_class_is_an_error() {
        assert_eq!(summarize(&[]), Err(GradeError::NoStudents));
    }

    #[test]
    fn test_sum_does_not_overflow_i32() {
        let records = vec![
            GradeRecord::new("a", i32::MAX),
            GradeRecord::new("b", i32::MAX),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.sum, 2 * i64::from(i32::MAX));
    }
}
