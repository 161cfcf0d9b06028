//! I/O module
//!
//! Handles reading fixed-width record files and writing the check report.
//!
//! # Components
//!
//! - `entry_reader` - Streaming reader yielding entries with their addenda
//! - `report_format` - CSV report rows and output serialization

pub mod entry_reader;
pub mod report_format;

pub use entry_reader::{EntryReader, ReadEntry};
pub use report_format::{write_report, EntryStatus, ReportRow, ReportWriter};
