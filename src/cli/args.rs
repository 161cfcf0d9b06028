use crate::check::CheckOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse and validate ACH entry detail records
#[derive(Parser, Debug)]
#[command(name = "ach-entry")]
#[command(about = "Parse and validate ACH entry detail records", long_about = None)]
pub struct CliArgs {
    /// Input file of 94-character records
    #[arg(value_name = "INPUT", help = "Path to a file of 94-character records")]
    pub input_file: PathBuf,

    /// Report entries without running format validation
    #[arg(
        long = "skip-validation",
        help = "Parse and report entries without validating them"
    )]
    pub skip_validation: bool,

    /// Log verbosity
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log output on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Check options from CLI arguments
    pub fn to_check_options(&self) -> CheckOptions {
        CheckOptions {
            validate: !self.skip_validation,
        }
    }

    /// Log filter directive for the verbosity level
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
