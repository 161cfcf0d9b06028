//! Fixed-width field primitives
//!
//! Shared building blocks for every 94-character record kind in the file format:
//! - `codec` - Slicing, parsing and padded rendering of numeric / alphanumeric columns
//! - `check_digit` - Routing number check digit calculation
//! - `validator` - Character set, transaction code and presence predicates
//!
//! Nothing in here knows about a specific record layout, so other record kinds
//! can reuse the same padding and check digit rules.

pub mod check_digit;
pub mod codec;
pub mod validator;

pub use check_digit::calculate_check_digit;
pub use codec::{
    pad_routing, parse_alphanumeric, parse_numeric, push_alphanumeric, push_numeric,
    render_alphanumeric, render_numeric, split_routing_number, CodecError,
};
pub use validator::{is_alphanumeric, is_transaction_code, FieldPresence, TRANSACTION_CODES};

/// Length of every record in the file format
pub const RECORD_LENGTH: usize = 94;
