//! Error types for Entry Detail processing
//!
//! This module defines the errors produced while parsing, rendering and
//! validating records, plus the errors raised while reading a file of records.
//!
//! # Error Categories
//!
//! - **Field Errors**: A single column of a single record is absent, malformed,
//!   too wide, or breaks a format rule. Always data-level, never fatal.
//! - **Entry Errors**: File I/O, report output, or a record level failure tagged
//!   with the line number it came from.

use crate::format::CodecError;
use thiserror::Error;

/// What went wrong with a field
///
/// The message is appended to the field name and value when a [`FieldError`]
/// is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    /// Mandatory field still holds its zero / empty default
    #[error("is a mandatory field and has a default value")]
    MissingRequiredField,

    /// Record type tag is not the one this record kind requires
    #[error("received expecting {expected}")]
    WrongRecordType {
        /// The tag this record kind must carry
        expected: &'static str,
    },

    /// Value is not part of the enumerated set (transaction code, addenda type)
    #[error("is not a valid value")]
    InvalidEnumValue,

    /// Characters outside the allowed alphanumeric set
    #[error("has non alphanumeric characters")]
    InvalidCharacterSet,

    /// Check digit does not match the routing identifier
    #[error("does not match calculated check digit {expected}")]
    CheckDigitMismatch {
        /// Check digit calculated from the routing identifier
        expected: u8,
    },

    /// Numeric column contains something other than digits
    #[error("is not a valid numeric value")]
    MalformedNumericField,

    /// Value is too wide for its fixed column
    #[error("exceeds field width {width}")]
    FieldOverflow {
        /// Column width in characters
        width: usize,
    },

    /// Input line is shorter than a full record
    #[error("must be {expected} characters")]
    InvalidRecordLength {
        /// Required record length
        expected: usize,
    },
}

/// Field level error
///
/// Names the field, the offending value, and what is wrong with it. Record
/// validation returns the first one it hits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field_name} {value} {kind}")]
pub struct FieldError {
    /// Name of the offending field
    pub field_name: String,
    /// Offending value as text
    pub value: String,
    /// What went wrong
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Create a FieldError
    pub fn new(field_name: &str, value: impl Into<String>, kind: FieldErrorKind) -> Self {
        FieldError {
            field_name: field_name.to_string(),
            value: value.into(),
            kind,
        }
    }

    /// Create a MissingRequiredField error
    pub fn missing_required(field_name: &str, value: impl Into<String>) -> Self {
        Self::new(field_name, value, FieldErrorKind::MissingRequiredField)
    }

    /// Create a WrongRecordType error
    pub fn wrong_record_type(value: impl Into<String>, expected: &'static str) -> Self {
        Self::new(
            "recordType",
            value,
            FieldErrorKind::WrongRecordType { expected },
        )
    }

    /// Create an InvalidEnumValue error
    pub fn invalid_enum(field_name: &str, value: impl Into<String>) -> Self {
        Self::new(field_name, value, FieldErrorKind::InvalidEnumValue)
    }

    /// Create an InvalidCharacterSet error
    pub fn invalid_character_set(field_name: &str, value: impl Into<String>) -> Self {
        Self::new(field_name, value, FieldErrorKind::InvalidCharacterSet)
    }

    /// Create a CheckDigitMismatch error
    pub fn check_digit_mismatch(value: impl Into<String>, expected: u8) -> Self {
        Self::new(
            "checkDigit",
            value,
            FieldErrorKind::CheckDigitMismatch { expected },
        )
    }

    /// Create a MalformedNumericField error
    pub fn malformed_numeric(field_name: &str, value: impl Into<String>) -> Self {
        Self::new(field_name, value, FieldErrorKind::MalformedNumericField)
    }

    /// Create a FieldOverflow error
    pub fn field_overflow(field_name: &str, value: impl Into<String>, width: usize) -> Self {
        Self::new(field_name, value, FieldErrorKind::FieldOverflow { width })
    }

    /// Create an InvalidRecordLength error
    pub fn invalid_record_length(value: impl Into<String>, expected: usize) -> Self {
        Self::new(
            "record",
            value,
            FieldErrorKind::InvalidRecordLength { expected },
        )
    }
}

impl CodecError {
    /// Attach the name of the column that failed
    pub fn for_field(self, field_name: &str) -> FieldError {
        match self {
            CodecError::MalformedNumeric { value } => {
                FieldError::malformed_numeric(field_name, value)
            }
            CodecError::Overflow { value, width } => {
                FieldError::field_overflow(field_name, value.to_string(), width)
            }
        }
    }
}

/// Errors raised while reading a file of records or writing the report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    /// Input file could not be opened
    #[error("Failed to open file '{path}': {message}")]
    FileOpen {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A record on the given line failed to parse, render or validate
    #[error("Line {line}: {source}")]
    Record {
        /// 1-based line number in the input
        line: u64,
        /// The field level failure
        source: FieldError,
    },

    /// Addenda record with no Entry Detail record before it
    #[error("Line {line}: addenda record without a preceding entry detail record")]
    OrphanAddenda {
        /// 1-based line number in the input
        line: u64,
    },

    /// Report could not be written
    #[error("Report error: {message}")]
    ReportError {
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for EntryError {
    fn from(error: std::io::Error) -> Self {
        EntryError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for EntryError {
    fn from(error: csv::Error) -> Self {
        EntryError::ReportError {
            message: error.to_string(),
        }
    }
}

impl EntryError {
    /// Create a Record error
    pub fn record(line: u64, source: FieldError) -> Self {
        EntryError::Record { line, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing(
        FieldError::missing_required("traceNumber", "000000000000000"),
        "traceNumber 000000000000000 is a mandatory field and has a default value"
    )]
    #[case::record_type(
        FieldError::wrong_record_type("5", "6"),
        "recordType 5 received expecting 6"
    )]
    #[case::transaction_code(
        FieldError::invalid_enum("transactionCode", "99"),
        "transactionCode 99 is not a valid value"
    )]
    #[case::character_set(
        FieldError::invalid_character_set("individualName", "Zoë"),
        "individualName Zoë has non alphanumeric characters"
    )]
    #[case::check_digit(
        FieldError::check_digit_mismatch("7", 4),
        "checkDigit 7 does not match calculated check digit 4"
    )]
    #[case::malformed(
        FieldError::malformed_numeric("amount", "00000A4200"),
        "amount 00000A4200 is not a valid numeric value"
    )]
    #[case::overflow(
        FieldError::field_overflow("amount", "12345678901", 10),
        "amount 12345678901 exceeds field width 10"
    )]
    #[case::length(
        FieldError::invalid_record_length("622", 94),
        "record 622 must be 94 characters"
    )]
    fn test_field_error_display(#[case] error: FieldError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::malformed(
        CodecError::MalformedNumeric { value: "12A".to_string() },
        FieldError::malformed_numeric("traceNumber", "12A")
    )]
    #[case::overflow(
        CodecError::Overflow { value: 123, width: 2 },
        FieldError::field_overflow("transactionCode", "123", 2)
    )]
    fn test_codec_error_for_field(#[case] error: CodecError, #[case] expected: FieldError) {
        let field = expected.field_name.clone();
        assert_eq!(error.for_field(&field), expected);
    }

    #[rstest]
    #[case::io(
        EntryError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::record(
        EntryError::record(3, FieldError::invalid_enum("transactionCode", "99")),
        "Line 3: transactionCode 99 is not a valid value"
    )]
    #[case::orphan(
        EntryError::OrphanAddenda { line: 1 },
        "Line 1: addenda record without a preceding entry detail record"
    )]
    fn test_entry_error_display(#[case] error: EntryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: EntryError = io_error.into();
        assert!(matches!(error, EntryError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
