use serde::{Deserialize, Serialize};

use crate::domain::{GradeRecord, GradeSummary, summarize};

use super::AppError;

/// Every record entered plus the class aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    pub records: Vec<GradeRecord>,
    pub summary: GradeSummary,
}

impl GradeReport {
    pub fn new(records: Vec<GradeRecord>) -> Result<Self, AppError> {
        let summary = summarize(&records)?;
        Ok(Self { records, summary })
    }
}
