//! ACH Entry Detail records
//!
//! # Overview
//!
//! This library reads, writes and validates the Entry Detail record of the ACH
//! batch file format: a fixed-width, 94-character line carrying one credit or
//! debit to one receiver account, optionally followed by addenda records.
//!
//! # Architecture
//!
//! - [`format`] - Field primitives shared by every record kind (padding,
//!   numeric parsing, routing number check digit, character set checks)
//! - [`types`] - Errors, addenda kinds, transaction code classification
//! - [`core`] - The Entry Detail record and addenda composition:
//!   - [`core::entry_detail`] - Parse, render, validate, setters
//!   - [`core::composition`] - How attached addenda change the record
//! - [`io`] - Streaming record reader and CSV report writer
//! - [`check`] - Full check pass over a record file
//! - [`cli`] - CLI arguments parsing
//!
//! # Example
//!
//! ```
//! use ach_entry::EntryDetail;
//!
//! let mut entry = EntryDetail::new();
//! entry.transaction_code = 22;
//! entry.set_routing_number("231380104");
//! entry.dfi_account_number = "744-5678-99".to_string();
//! entry.amount = 4200;
//! entry.individual_name = "Receiver Account Name".to_string();
//! entry.set_trace_number("12104288", 1).unwrap();
//!
//! assert!(entry.validate().is_ok());
//! let line = entry.render().unwrap();
//! assert_eq!(line.len(), 94);
//! assert_eq!(EntryDetail::parse(&line).unwrap().render().unwrap(), line);
//! ```

// Module declarations
pub mod check;
pub mod cli;
pub mod core;
pub mod format;
pub mod io;
pub mod types;

pub use check::{check_file, CheckOptions, CheckSummary};
pub use core::{EntryDetail, FixedWidthRecord};
pub use io::{write_report, EntryReader, ReadEntry, ReportWriter};
pub use types::{Addenda, Category, Direction, EntryError, FieldError, FieldErrorKind};
