use std::str::FromStr;

use crate::error::{Error, Result};

/// Target of a grade deletion.
///
/// `Index` wins whenever it is in range for the record. An out-of-range
/// index is retried as a value lookup, so `Index(10)` on a three-grade
/// record looks for a grade equal to `10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeSelector {
    Index(usize),
    Value(f64),
}

impl GradeSelector {
    /// Value to search for when the selector is not used as an index
    pub fn as_value(&self) -> f64 {
        match *self {
            Self::Index(index) => index as f64,
            Self::Value(value) => value,
        }
    }
}

impl FromStr for GradeSelector {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(Self::Index(index));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Value(value)),
            _ => Err(Error::invalid(format!(
                "Cannot delete grade: {}. Either not found or invalid index.",
                text
            ))),
        }
    }
}

impl From<usize> for GradeSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<f64> for GradeSelector {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Display for GradeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "index {}", index),
            Self::Value(value) => write!(f, "value {}", value),
        }
    }
}
