//! File check pipeline
//!
//! Orchestrates a full pass over a record file:
//! - Reading entries and their addenda with `EntryReader`
//! - Validating each entry (unless turned off)
//! - Writing one report row per entry as soon as it is checked, with
//!   `ReportWriter`
//!
//! Bad records are logged and counted, and the pass carries on. Only I/O
//! failures stop it; rows written before the failure stay in the output.

use crate::io::{EntryReader, EntryStatus, ReadEntry, ReportRow, ReportWriter};
use crate::types::EntryError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Options for a check pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Run format validation on every entry
    pub validate: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions { validate: true }
    }
}

/// Counts from a check pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Entries read and reported
    pub entries: usize,
    /// Entries that failed validation
    pub invalid: usize,
    /// Lines that could not be read as an entry or addenda
    pub rejected: usize,
}

/// Check every entry in a file and write the report to `output`
///
/// # Errors
///
/// Returns an error if the file cannot be opened, reading fails part way, or
/// the report cannot be written. Bad records are not errors here.
pub fn check_file(
    input_path: &Path,
    options: CheckOptions,
    output: &mut dyn Write,
) -> Result<CheckSummary, EntryError> {
    let reader = EntryReader::open(input_path)?;
    check_entries(reader, options, output)
}

/// Check entries from any source of read results and write the report
pub fn check_entries<I>(
    records: I,
    options: CheckOptions,
    output: &mut dyn Write,
) -> Result<CheckSummary, EntryError>
where
    I: IntoIterator<Item = Result<ReadEntry, EntryError>>,
{
    let mut summary = CheckSummary::default();
    let mut report = ReportWriter::new(output)?;

    for result in records {
        match result {
            Ok(read) => {
                let status = if options.validate {
                    match read.entry.validate() {
                        Ok(()) => EntryStatus::Valid,
                        Err(e) => {
                            warn!(line = read.line, error = %e, "entry failed validation");
                            summary.invalid += 1;
                            EntryStatus::Invalid(e)
                        }
                    }
                } else {
                    EntryStatus::Unchecked
                };
                summary.entries += 1;
                report.write_row(&ReportRow::new(read.line, &read.entry, &status))?;
            }
            Err(e @ (EntryError::IoError { .. } | EntryError::FileOpen { .. })) => return Err(e),
            Err(e) => {
                warn!(error = %e, "skipping record");
                summary.rejected += 1;
            }
        }
    }

    report.finish()?;

    info!(
        entries = summary.entries,
        invalid = summary.invalid,
        rejected = summary.rejected,
        "check complete"
    );
    Ok(summary)
}
