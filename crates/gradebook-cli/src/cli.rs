//! CLI argument definitions for gradebook.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Single-student grade tracker", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the sample S001 / John Doe walkthrough
    Demo,
    /// Build a record from arguments and print its summary report
    Report {
        /// Student identifier
        #[arg(long, env = "GRADEBOOK_STUDENT_ID")]
        id: String,
        /// Student display name
        #[arg(long, env = "GRADEBOOK_STUDENT_NAME")]
        name: String,
        /// Grade to add (0-100), repeatable
        #[arg(short, long = "grade", value_name = "GRADE", allow_hyphen_values = true)]
        grades: Vec<String>,
        /// Grade to delete after adding: an index, or a value, repeatable
        #[arg(short, long = "delete", value_name = "INDEX|VALUE", allow_hyphen_values = true)]
        deletes: Vec<String>,
        /// Output as JSON
        #[arg(long, conflicts_with = "color")]
        json: bool,
        /// Colorize the report
        #[arg(long)]
        color: bool,
    },
}
