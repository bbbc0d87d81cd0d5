//! Single-student grade record.
//!
//! `GradeRecord` owns an id, a display name and an ordered list of grades.
//! Letter grade, pass/fail and honor status are cached on the record and
//! refreshed by the `determine_*`/`check_honor` calls. Every report and
//! summary path goes through `refresh_derived` first, so rendered output
//! never reflects stale values.

mod summary;

pub use summary::RecordSummary;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::grade::{
    GradeSelector, LetterGrade, PassStatus, parse_grade, qualifies_for_honor, validate_grade,
};
use crate::report::format_report;

#[derive(Debug, Clone)]
pub struct GradeRecord {
    id: String,
    name: String,
    grades: Vec<f64>,
    letter_grade: LetterGrade,
    pass_status: PassStatus,
    honor: bool,
}

impl GradeRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() || name.is_empty() {
            return Err(Error::invalid("Student ID and name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            grades: Vec::new(),
            letter_grade: LetterGrade::F,
            pass_status: PassStatus::Failed,
            honor: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Letter grade as of the last derivation call
    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }

    /// Pass/fail status as of the last derivation call
    pub fn pass_status(&self) -> PassStatus {
        self.pass_status
    }

    pub fn is_passed(&self) -> bool {
        self.pass_status.is_passed()
    }

    /// Honor roll status as of the last derivation call
    pub fn is_honor(&self) -> bool {
        self.honor
    }

    /// Append a grade. Values outside 0-100 (or not finite) are rejected
    /// and leave the record untouched.
    pub fn add_grade(&mut self, value: f64) -> Result<()> {
        let value = validate_grade(value)?;
        self.grades.push(value);
        debug!("Added grade {} for {}", value, self.id);
        Ok(())
    }

    /// Append a grade given as text, e.g. `"88.5"`
    pub fn add_grade_str(&mut self, text: &str) -> Result<()> {
        let value = parse_grade(text)?;
        self.add_grade(value)
    }

    pub fn calculate_average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.iter().sum();
        total / self.grades.len() as f64
    }

    pub fn determine_letter_grade(&mut self) -> LetterGrade {
        self.letter_grade = LetterGrade::from_average(self.calculate_average());
        self.letter_grade
    }

    pub fn determine_pass_fail(&mut self) -> PassStatus {
        self.pass_status = PassStatus::from_average(self.calculate_average());
        self.pass_status
    }

    pub fn check_honor(&mut self) -> bool {
        self.honor = qualifies_for_honor(self.calculate_average());
        self.honor
    }

    pub fn refresh_derived(&mut self) {
        self.determine_letter_grade();
        self.determine_pass_fail();
        self.check_honor();
    }

    /// Remove a grade by position or by value and return it.
    ///
    /// An in-range `Index` removes that position. Anything else removes the
    /// first grade equal to the selector's value, failing with `NotFound`
    /// when no grade matches.
    pub fn delete_grade(&mut self, selector: impl Into<GradeSelector>) -> Result<f64> {
        let selector = selector.into();

        if let GradeSelector::Index(index) = selector {
            if index < self.grades.len() {
                let removed = self.grades.remove(index);
                info!("Removed grade by {}: {}", selector, removed);
                return Ok(removed);
            }
        }

        let value = selector.as_value();
        match self.grades.iter().position(|&grade| grade == value) {
            Some(position) => {
                let removed = self.grades.remove(position);
                info!("Removed grade by {}: {}", GradeSelector::Value(value), removed);
                Ok(removed)
            }
            None => Err(Error::not_found(format!(
                "Grade {} not found in grades list",
                value
            ))),
        }
    }

    /// Delete using a textual selector: integers are indexes, other numbers values
    pub fn delete_grade_str(&mut self, text: &str) -> Result<f64> {
        let selector: GradeSelector = text.parse()?;
        self.delete_grade(selector)
    }

    pub fn summary(&mut self) -> RecordSummary {
        self.refresh_derived();
        RecordSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            grades: self.grades.clone(),
            average: self.calculate_average(),
            letter_grade: self.letter_grade,
            pass_status: self.pass_status,
            honor: self.honor,
        }
    }

    pub fn render_report(&mut self) -> String {
        format_report(&self.summary())
    }

    pub fn write_report<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        writer.write_all(self.render_report().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Refresh derived fields and print the summary report to stdout
    pub fn generate_report(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)
    }
}
