//! Demo command implementation.

use anyhow::Result;
use gradebook_core::GradeRecord;
use tracing::warn;

/// Run the sample walkthrough and print the final report.
pub fn run() -> Result<()> {
    let mut record = walkthrough()?;

    println!();
    record.generate_report()?;

    Ok(())
}

/// Build the S001 / John Doe record.
///
/// Invalid input along the way is logged and skipped; only a failure to
/// create the record ends the walkthrough with an error.
pub fn walkthrough() -> Result<GradeRecord> {
    let mut record = GradeRecord::new("S001", "John Doe")?;

    record.add_grade(95.0)?;
    record.add_grade(88.5)?;
    record.add_grade(92.0)?;

    if let Err(e) = record.add_grade_str("Fifty") {
        warn!("Error adding grade: {}", e);
    }

    println!();
    println!("Current average: {:.2}", record.calculate_average());

    record.check_honor();

    if let Err(e) = record.delete_grade(10usize) {
        warn!("Error deleting grade: {}", e);
    }

    if let Err(e) = record.delete_grade(0usize) {
        warn!("Error: {}", e);
    }

    Ok(record)
}
