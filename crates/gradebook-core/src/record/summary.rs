use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grade::{LetterGrade, PassStatus};

/// Snapshot of a record with every derived field freshly computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
    pub grades: Vec<f64>,
    pub average: f64,
    pub letter_grade: LetterGrade,
    pub pass_status: PassStatus,
    pub honor: bool,
}

impl RecordSummary {
    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
