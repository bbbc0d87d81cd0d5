//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported.
// Keep in sync with src/cli.rs.
#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Single-student grade tracker", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Demo,
    Report {
        #[arg(long, env = "GRADEBOOK_STUDENT_ID")]
        id: String,
        #[arg(long, env = "GRADEBOOK_STUDENT_NAME")]
        name: String,
        #[arg(short, long = "grade", value_name = "GRADE", allow_hyphen_values = true)]
        grades: Vec<String>,
        #[arg(short, long = "delete", value_name = "INDEX|VALUE", allow_hyphen_values = true)]
        deletes: Vec<String>,
        #[arg(long, conflicts_with = "color")]
        json: bool,
        #[arg(long)]
        color: bool,
    },
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["gradebook"]).unwrap();
    assert!(args.command.is_none());
}

#[test]
fn test_parse_demo() {
    let args = Args::try_parse_from(["gradebook", "demo"]).unwrap();
    assert!(matches!(args.command, Some(Command::Demo)));
}

#[test]
fn test_parse_report_minimal() {
    let args =
        Args::try_parse_from(["gradebook", "report", "--id", "S001", "--name", "John Doe"])
            .unwrap();
    match args.command {
        Some(Command::Report {
            id,
            name,
            grades,
            deletes,
            json,
            color,
        }) => {
            assert_eq!(id, "S001");
            assert_eq!(name, "John Doe");
            assert!(grades.is_empty());
            assert!(deletes.is_empty());
            assert!(!json);
            assert!(!color);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_parse_report_repeated_grades_and_deletes() {
    let args = Args::try_parse_from([
        "gradebook", "report", "--id", "S001", "--name", "John Doe", "-g", "95", "--grade",
        "88.5", "-g", "Fifty", "-d", "0", "--delete", "88.5",
    ])
    .unwrap();
    match args.command {
        Some(Command::Report {
            grades, deletes, ..
        }) => {
            assert_eq!(grades, vec!["95", "88.5", "Fifty"]);
            assert_eq!(deletes, vec!["0", "88.5"]);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_parse_report_negative_grade_value() {
    let args = Args::try_parse_from([
        "gradebook", "report", "--id", "S001", "--name", "John Doe", "-g", "-5",
    ])
    .unwrap();
    match args.command {
        Some(Command::Report { grades, .. }) => {
            assert_eq!(grades, vec!["-5"]);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_parse_report_json() {
    let args = Args::try_parse_from([
        "gradebook", "report", "--id", "S001", "--name", "John Doe", "--json",
    ])
    .unwrap();
    match args.command {
        Some(Command::Report { json, color, .. }) => {
            assert!(json);
            assert!(!color);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_json_conflicts_with_color() {
    let result = Args::try_parse_from([
        "gradebook", "report", "--id", "S001", "--name", "John Doe", "--json", "--color",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_version_flag() {
    let err = Args::try_parse_from(["gradebook", "--version"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_unknown_subcommand() {
    assert!(Args::try_parse_from(["gradebook", "export"]).is_err());
}
