//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `addenda`: Addenda kinds and the entry category they imply
//! - `transaction_code`: Credit / debit classification of transaction codes
//! - `error`: Field level and file level error types

pub mod addenda;
pub mod error;
pub mod transaction_code;

pub use addenda::{Addenda, AddendaRecord, Category, ADDENDA_RECORD_TYPE};
pub use error::{EntryError, FieldError, FieldErrorKind};
pub use transaction_code::Direction;
