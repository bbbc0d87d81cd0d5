use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::status::{HONOR_THRESHOLD, PASS_THRESHOLD};

/// Pass/fail outcome of a record's average
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, IntoStaticStr,
)]
pub enum PassStatus {
    Passed,
    #[default]
    Failed,
}

impl PassStatus {
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_THRESHOLD {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn qualifies_for_honor(average: f64) -> bool {
    average >= HONOR_THRESHOLD
}

/// Render honor roll status as it appears in the report
pub fn honor_label(honor: bool) -> &'static str {
    if honor { "Yes" } else { "No" }
}
