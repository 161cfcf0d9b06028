//! ACH entry detail checker
//!
//! Reads a file of 94-character records, parses every Entry Detail record (and
//! the addenda that follow it), validates it, and writes a CSV report to stdout.
//!
//! # Usage
//!
//! ```bash
//! ach-entry payroll.ach > report.csv
//! ach-entry --skip-validation payroll.ach > report.csv
//! ach-entry -vv payroll.ach > report.csv
//! ```
//!
//! Record level problems are logged to stderr and do not stop the run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, report not writable)

use ach_entry::check::check_file;
use ach_entry::cli;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = check_file(&args.input_file, args.to_check_options(), &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
