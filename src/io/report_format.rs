//! CSV report of checked entries
//!
//! One row per entry read, with the key fields in human friendly form and the
//! outcome of validation. Writing is pure apart from the output writer, which
//! keeps it easy to test.

use crate::core::EntryDetail;
use crate::types::{Category, EntryError, FieldError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::io::Write;

const HEADER: [&str; 11] = [
    "line",
    "trace_number",
    "transaction_code",
    "direction",
    "rdfi",
    "account",
    "amount",
    "name",
    "category",
    "addenda",
    "status",
];

/// Outcome of checking one entry
#[derive(Debug, Clone, PartialEq)]
pub enum EntryStatus {
    /// Passed validation
    Valid,
    /// Validation was skipped
    Unchecked,
    /// First validation failure
    Invalid(FieldError),
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Valid => f.write_str("valid"),
            EntryStatus::Unchecked => f.write_str("unchecked"),
            EntryStatus::Invalid(e) => write!(f, "invalid: {}", e),
        }
    }
}

/// One report row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub line: u64,
    pub trace_number: String,
    pub transaction_code: u8,
    pub direction: &'static str,
    pub rdfi: String,
    pub account: String,
    pub amount: String,
    pub name: String,
    pub category: Category,
    pub addenda: usize,
    pub status: String,
}

impl ReportRow {
    /// Build a row from an entry and its check outcome
    ///
    /// The amount is shown in currency units with two decimals; text columns
    /// lose their padding.
    pub fn new(line: u64, entry: &EntryDetail, status: &EntryStatus) -> Self {
        let amount = Decimal::from(entry.amount) / Decimal::ONE_HUNDRED;
        ReportRow {
            line,
            trace_number: entry
                .trace_number_field()
                .unwrap_or_else(|_| entry.trace_number.to_string()),
            transaction_code: entry.transaction_code,
            direction: entry.credit_or_debit(),
            rdfi: format!("{}{}", entry.rdfi_identification_field(), entry.check_digit),
            account: entry.dfi_account_number.trim_end().to_string(),
            amount: format!("{:.2}", amount),
            name: entry.individual_name.trim_end().to_string(),
            category: entry.category(),
            addenda: entry.addendum().len(),
            status: status.to_string(),
        }
    }
}

/// Streaming CSV report writer
///
/// The header goes out as soon as the writer is created, and each row as soon as
/// it is written, so rows already checked survive a later failure.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Start a report on `output`, writing the header
    pub fn new(output: W) -> Result<Self, EntryError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);
        writer.write_record(HEADER)?;
        Ok(ReportWriter { writer })
    }

    /// Append one row
    pub fn write_row(&mut self, row: &ReportRow) -> Result<(), EntryError> {
        self.writer.serialize(row)?;
        Ok(())
    }

    /// Flush everything written so far
    pub fn finish(mut self) -> Result<(), EntryError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write report rows as CSV
///
/// The header is always written, even when there are no rows. Rows keep the
/// order they were read in.
pub fn write_report(rows: &[ReportRow], output: &mut dyn Write) -> Result<(), EntryError> {
    let mut report = ReportWriter::new(output)?;
    for row in rows {
        report.write_row(row)?;
    }
    report.finish()
}
