//! Grading thresholds and report layout.
//!
//! This module groups the fixed constants the record and report depend on:
//! - Accepted grade range
//! - Letter grade cutoffs
//! - Pass and honor roll cutoffs
//! - Report rule layout

/// Accepted grade range (inclusive on both ends).
pub mod bounds {
    /// Lowest grade accepted by `GradeRecord::add_grade`.
    pub const MIN_GRADE: f64 = 0.0;

    /// Highest grade accepted by `GradeRecord::add_grade`.
    pub const MAX_GRADE: f64 = 100.0;
}

/// Letter grade cutoffs. Each value is the inclusive lower bound of its letter.
pub mod letter {
    pub const A: f64 = 90.0;
    pub const B: f64 = 80.0;
    pub const C: f64 = 70.0;
    pub const D: f64 = 60.0;
}

/// Pass/fail and honor roll cutoffs on the average grade.
pub mod status {
    /// Minimum average to pass.
    pub const PASS_THRESHOLD: f64 = 60.0;

    /// Minimum average for the honor roll.
    pub const HONOR_THRESHOLD: f64 = 90.0;
}

/// Summary report layout.
pub mod report {
    /// Width of the `=` rule above and below the report body.
    pub const RULE_WIDTH: usize = 50;

    /// Character the rule is drawn with.
    pub const RULE_CHAR: char = '=';

    /// Title line between the first two rules.
    pub const TITLE: &str = "STUDENT SUMMARY REPORT";
}
