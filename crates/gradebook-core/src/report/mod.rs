//! Summary report rendering.

mod console;

pub use console::{format_report_console, format_summary_line};

use std::fmt::Write as _;

use crate::config::report::{RULE_CHAR, RULE_WIDTH, TITLE};
use crate::grade::honor_label;
use crate::record::RecordSummary;

pub fn rule() -> String {
    std::iter::repeat_n(RULE_CHAR, RULE_WIDTH).collect()
}

/// Format the plain-text student summary report
///
/// Every line, including the closing rule, ends with a newline.
pub fn format_report(summary: &RecordSummary) -> String {
    let mut output = String::new();
    let rule = rule();

    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "{}", TITLE);
    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "Student ID:      {}", summary.id);
    let _ = writeln!(output, "Student Name:    {}", summary.name);
    let _ = writeln!(output, "Number of Grades: {}", summary.grade_count());
    let _ = writeln!(output, "Average Grade:   {:.2}", summary.average);
    let _ = writeln!(output, "Letter Grade:    {}", summary.letter_grade);
    let _ = writeln!(output, "Pass/Fail:       {}", summary.pass_status);
    let _ = writeln!(output, "Honor Roll:      {}", honor_label(summary.honor));
    let _ = writeln!(output, "{}", rule);

    output
}
