//! Report command implementation.

use anyhow::Result;
use gradebook_core::{
    GradeRecord, RecordSummary, format_report, format_report_console, format_summary_line,
};
use tracing::{info, warn};

/// Output style for the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Color,
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, color: bool) -> Self {
        if json {
            Self::Json
        } else if color {
            Self::Color
        } else {
            Self::Plain
        }
    }
}

/// Run the report command
pub fn run(
    id: &str,
    name: &str,
    grades: &[String],
    deletes: &[String],
    json: bool,
    color: bool,
) -> Result<()> {
    let mut record = build_record(id, name, grades, deletes)?;

    let summary = record.summary();
    info!("{}", format_summary_line(&summary));

    print!("{}", render(&summary, OutputFormat::from_flags(json, color))?);

    Ok(())
}

/// Build a record from command-line values.
///
/// Grades are added in order, then deletions applied in order. Invalid
/// grades and failed deletions are logged and skipped.
pub fn build_record(
    id: &str,
    name: &str,
    grades: &[String],
    deletes: &[String],
) -> Result<GradeRecord> {
    let mut record = GradeRecord::new(id, name)?;

    for grade in grades {
        match record.add_grade_str(grade) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => warn!("Skipping grade {:?}: {}", grade, e),
            Err(e) => return Err(e.into()),
        }
    }

    for selector in deletes {
        match record.delete_grade_str(selector) {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => warn!("Skipping delete {:?}: {}", selector, e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(record)
}

pub fn render(summary: &RecordSummary, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => format!("{}\n", summary.to_json()?),
        OutputFormat::Color => format_report_console(summary),
        OutputFormat::Plain => format_report(summary),
    };
    Ok(output)
}
