//! Field level predicates
//!
//! Stateless checks shared by every record kind. Record validation composes
//! these and attaches the field name to any failure.

/// Legal Entry Detail transaction codes
///
/// Credit / debit, checking / savings, live / prenote:
/// - `22` checking credit, `23` checking credit prenote
/// - `27` checking debit, `28` checking debit prenote
/// - `32` savings credit, `33` savings credit prenote
/// - `37` savings debit, `38` savings debit prenote
pub const TRANSACTION_CODES: [u8; 8] = [22, 23, 27, 28, 32, 33, 37, 38];

/// Punctuation accepted in alphanumeric columns
const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// True when every character is an ASCII letter, digit, space or allowed punctuation
pub fn is_alphanumeric(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b' ' || PUNCTUATION.contains(&b))
}

/// True when `code` is one of [`TRANSACTION_CODES`]
pub fn is_transaction_code(code: u8) -> bool {
    TRANSACTION_CODES.contains(&code)
}

/// Whether a field holds something other than its zero / empty default
///
/// Used for the mandatory field sweep.
pub trait FieldPresence {
    fn is_present(&self) -> bool;
}

impl FieldPresence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl FieldPresence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_numeric_presence {
    ($($t:ty),*) => {
        $(
            impl FieldPresence for $t {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_numeric_presence!(u8, u16, u32, u64);
