//! ABA routing number check digit
//!
//! The check digit is the ninth digit of a routing number. It is derived from
//! the first eight digits with weights 3, 7, 1 repeating: sum the weighted
//! digits and take `(10 - sum % 10) % 10`.

const WEIGHTS: [u32; 8] = [3, 7, 1, 3, 7, 1, 3, 7];

/// Calculate the check digit for an 8 digit routing identifier
///
/// Returns `None` when the input is not exactly eight ASCII digits.
///
/// # Examples
///
/// ```
/// use ach_entry::format::calculate_check_digit;
///
/// assert_eq!(calculate_check_digit("23138010"), Some(4));
/// assert_eq!(calculate_check_digit("2313801"), None);
/// ```
pub fn calculate_check_digit(identifier: &str) -> Option<u8> {
    let bytes = identifier.as_bytes();
    if bytes.len() != WEIGHTS.len() {
        return None;
    }

    let mut sum = 0u32;
    for (b, weight) in bytes.iter().zip(WEIGHTS) {
        if !b.is_ascii_digit() {
            return None;
        }
        sum += u32::from(b - b'0') * weight;
    }

    // sum % 10 < 10, so the result always fits in a u8
    Some(((10 - sum % 10) % 10) as u8)
}
