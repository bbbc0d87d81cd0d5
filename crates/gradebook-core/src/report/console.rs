//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::config::report::TITLE;
use crate::grade::{LetterGrade, PassStatus, honor_label};
use crate::record::RecordSummary;

use super::rule;

/// Format the summary report for a terminal
///
/// Same lines as `format_report`, with the rules dimmed and the
/// letter grade, pass/fail and honor values colored.
pub fn format_report_console(summary: &RecordSummary) -> String {
    let mut output = String::new();
    let border = rule();
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", TITLE.bold());
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "Student ID:      {}", summary.id);
    let _ = writeln!(output, "Student Name:    {}", summary.name.bold());
    let _ = writeln!(output, "Number of Grades: {}", summary.grade_count());
    let _ = writeln!(output, "Average Grade:   {:.2}", summary.average);
    let _ = writeln!(
        output,
        "Letter Grade:    {}",
        format_colored_letter(&summary.letter_grade)
    );
    let _ = writeln!(
        output,
        "Pass/Fail:       {}",
        format_colored_status(&summary.pass_status)
    );
    let _ = writeln!(
        output,
        "Honor Roll:      {}",
        format_colored_honor(summary.honor)
    );
    let _ = writeln!(output, "{}", border_dim);

    output
}

/// Format letter grade with color
fn format_colored_letter(letter: &LetterGrade) -> String {
    let name = letter.short_name();
    match letter {
        LetterGrade::A => name.truecolor(255, 200, 0).bold().to_string(),
        LetterGrade::B => name.green().to_string(),
        LetterGrade::C => name.cyan().to_string(),
        LetterGrade::D => name.yellow().to_string(),
        LetterGrade::F => name.red().to_string(),
    }
}

fn format_colored_status(status: &PassStatus) -> String {
    match status {
        PassStatus::Passed => status.as_str().green().to_string(),
        PassStatus::Failed => status.as_str().red().to_string(),
    }
}

fn format_colored_honor(honor: bool) -> String {
    let label = honor_label(honor);
    if honor {
        label.truecolor(255, 200, 0).to_string()
    } else {
        label.dimmed().to_string()
    }
}

/// One-line record summary for logging
pub fn format_summary_line(summary: &RecordSummary) -> String {
    format!(
        "{} {}: {} grades, avg {:.2} ({}, {}{})",
        summary.id,
        summary.name,
        summary.grade_count(),
        summary.average,
        summary.letter_grade,
        summary.pass_status,
        if summary.honor { ", honor" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(average: f64, honor: bool) -> RecordSummary {
        RecordSummary {
            id: "S001".to_string(),
            name: "John Doe".to_string(),
            grades: vec![88.5, 92.0],
            average,
            letter_grade: LetterGrade::from_average(average),
            pass_status: PassStatus::from_average(average),
            honor,
        }
    }

    #[test]
    fn test_format_summary_line() {
        let line = format_summary_line(&summary(90.25, true));
        assert_eq!(line, "S001 John Doe: 2 grades, avg 90.25 (A, Passed, honor)");

        let line = format_summary_line(&summary(55.0, false));
        assert_eq!(line, "S001 John Doe: 2 grades, avg 55.00 (F, Failed)");
    }

    #[test]
    fn test_console_report_keeps_fields() {
        let report = format_report_console(&summary(90.25, true));
        assert!(report.contains("STUDENT SUMMARY REPORT"));
        assert!(report.contains("S001"));
        assert!(report.contains("John Doe"));
        assert!(report.contains("90.25"));
        assert!(report.contains("Passed"));
        assert!(report.contains("Yes"));
        assert_eq!(report.lines().count(), 11);
    }
}
