//! Core trait for fixed-width records
//!
//! Every record kind in the file format is a 94-character line with a one
//! character type tag in column 1. This trait lets readers handle Entry Detail
//! and addenda records through the same interface, deciding what a line is
//! before trying to decode it.

use crate::types::FieldError;

/// A record that reads from and writes to a single fixed-width line
pub trait FixedWidthRecord: Sized {
    /// Tag in column 1 identifying this record kind
    const RECORD_TYPE: &'static str;

    /// Read the record from a line
    fn parse_record(line: &str) -> Result<Self, FieldError>;

    /// Whether a line is tagged as this record kind
    fn is_tagged(line: &str) -> bool {
        Self::is_tagged_bytes(line.as_bytes())
    }

    /// Whether a raw, possibly undecodable, line is tagged as this record kind
    fn is_tagged_bytes(line: &[u8]) -> bool {
        line.starts_with(Self::RECORD_TYPE.as_bytes())
    }
}
