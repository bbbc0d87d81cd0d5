pub mod config;
pub mod error;
pub mod grade;
pub mod record;
pub mod report;

pub use error::{Error, Result};
pub use grade::{GradeSelector, LetterGrade, PassStatus};
pub use record::{GradeRecord, RecordSummary};
pub use report::{format_report, format_report_console, format_summary_line};
