//! Field codec for fixed-width columns
//!
//! Converts between raw column text and typed values. Numeric columns are
//! right-justified and zero filled, alphanumeric columns are left-justified and
//! space filled. Routing numbers are zero filled on the left and split into an
//! identifier plus a trailing check digit.
//!
//! The `push_*` functions append into a caller owned buffer so a whole record can
//! be rendered into a single allocation. The `render_*` functions are thin
//! wrappers for callers that want one column on its own.

use thiserror::Error;

/// Failure converting a single column
///
/// Carries no field name; callers attach one when turning this into a
/// [`FieldError`](crate::types::FieldError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Column contains something other than digits and padding spaces
    #[error("'{value}' is not a valid numeric value")]
    MalformedNumeric { value: String },

    /// Value has more digits than the column can hold
    #[error("{value} exceeds field width {width}")]
    Overflow { value: u64, width: usize },
}

/// Parse a numeric column
///
/// Leading zeros and surrounding spaces are padding. An all-space (or empty)
/// column is zero. Any other character, including a space between digits,
/// is rejected.
pub fn parse_numeric(text: &str) -> Result<u64, CodecError> {
    let malformed = || CodecError::MalformedNumeric {
        value: text.to_string(),
    };

    text.trim_matches(' ').bytes().try_fold(0u64, |acc, b| {
        if !b.is_ascii_digit() {
            return Err(malformed());
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or_else(malformed)
    })
}

/// Parse an alphanumeric column
///
/// Returned verbatim, padding included. Character set legality is checked by
/// the validator, not here.
pub fn parse_alphanumeric(text: &str) -> String {
    text.to_string()
}

/// Append `value` zero filled to exactly `width` digits
pub fn push_numeric(buf: &mut String, value: u64, width: usize) -> Result<(), CodecError> {
    if digit_count(value) > width {
        return Err(CodecError::Overflow { value, width });
    }
    buf.push_str(&format!("{:0width$}", value, width = width));
    Ok(())
}

/// Render `value` zero filled to exactly `width` digits
pub fn render_numeric(value: u64, width: usize) -> Result<String, CodecError> {
    let mut out = String::with_capacity(width);
    push_numeric(&mut out, value, width)?;
    Ok(out)
}

/// Append `value` left-justified and space filled to exactly `width` characters
///
/// Values wider than the column are truncated to the first `width` characters.
/// This matches what existing fixed-width producers emit and is kept on purpose.
pub fn push_alphanumeric(buf: &mut String, value: &str, width: usize) {
    let mut written = 0;
    for c in value.chars().take(width) {
        buf.push(c);
        written += 1;
    }
    buf.extend(std::iter::repeat(' ').take(width - written));
}

/// Render `value` left-justified and space filled to exactly `width` characters
pub fn render_alphanumeric(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    push_alphanumeric(&mut out, value, width);
    out
}

/// Zero fill a routing number (or routing prefix) on the left to `width`
///
/// Longer input keeps its first `width` characters.
pub fn pad_routing(raw: &str, width: usize) -> String {
    let len = raw.chars().count();
    if len >= width {
        return raw.chars().take(width).collect();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat('0').take(width - len));
    out.push_str(raw);
    out
}

/// Split a routing number into a `width` character identifier and a check digit
///
/// The input is first zero filled (or cut) to `width + 1` characters.
pub fn split_routing_number(raw: &str, width: usize) -> (String, String) {
    let mut identifier = pad_routing(raw, width + 1);
    let split_at = identifier
        .char_indices()
        .nth(width)
        .map_or(identifier.len(), |(idx, _)| idx);
    let check = identifier.split_off(split_at);
    (identifier, check)
}

fn digit_count(mut value: u64) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("4200", 4200)]
    #[case::leading_zeros("0000004200", 4200)]
    #[case::leading_spaces("      4200", 4200)]
    #[case::trailing_spaces("4200  ", 4200)]
    #[case::all_zeros("000000000000000", 0)]
    #[case::all_spaces("          ", 0)]
    #[case::empty("", 0)]
    #[case::fifteen_digits("123456789012345", 123_456_789_012_345)]
    fn test_parse_numeric(#[case] text: &str, #[case] expected: u64) {
        assert_eq!(parse_numeric(text), Ok(expected));
    }

    #[rstest]
    #[case::letter("00000A4200")]
    #[case::sign("-000004200")]
    #[case::inner_space("0000 04200")]
    #[case::decimal_point("000042.00")]
    #[case::too_large_for_u64("99999999999999999999999")]
    fn test_parse_numeric_rejects_malformed(#[case] text: &str) {
        assert_eq!(
            parse_numeric(text),
            Err(CodecError::MalformedNumeric {
                value: text.to_string()
            })
        );
    }

    #[test]
    fn test_parse_alphanumeric_is_verbatim() {
        assert_eq!(parse_alphanumeric("  Bob  "), "  Bob  ");
    }

    #[rstest]
    #[case::amount(4200, 10, "0000004200")]
    #[case::zero(0, 2, "00")]
    #[case::exact_width(12, 2, "12")]
    #[case::trace(121042880000001, 15, "121042880000001")]
    fn test_render_numeric(#[case] value: u64, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(render_numeric(value, width).unwrap(), expected);
    }

    #[test]
    fn test_render_numeric_overflow() {
        assert_eq!(
            render_numeric(12_345_678_901, 10),
            Err(CodecError::Overflow {
                value: 12_345_678_901,
                width: 10
            })
        );
    }

    #[rstest]
    #[case::short("12345", "12345            ")]
    #[case::exact("12345678901234567", "12345678901234567")]
    #[case::truncated("123456789012345678901", "12345678901234567")]
    #[case::empty("", "                 ")]
    fn test_render_alphanumeric_account_width(#[case] value: &str, #[case] expected: &str) {
        let rendered = render_alphanumeric(value, 17);
        assert_eq!(rendered, expected);
        assert_eq!(rendered.len(), 17);
    }

    #[test]
    fn test_push_appends_into_shared_buffer() {
        let mut buf = String::from("6");
        push_numeric(&mut buf, 22, 2).unwrap();
        push_alphanumeric(&mut buf, "AB", 4);
        assert_eq!(buf, "622AB  ");
    }

    #[rstest]
    #[case::short("42", 8, "00000042")]
    #[case::exact("23138010", 8, "23138010")]
    #[case::long("2313801049", 8, "23138010")]
    fn test_pad_routing(#[case] raw: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_routing(raw, width), expected);
    }

    #[rstest]
    #[case::full("231380104", "23138010", "4")]
    #[case::zero_filled("21000021", "02100002", "1")]
    #[case::too_long("1210428821", "12104288", "2")]
    #[case::empty("", "00000000", "0")]
    fn test_split_routing_number(
        #[case] raw: &str,
        #[case] identifier: &str,
        #[case] check: &str,
    ) {
        let (id, digit) = split_routing_number(raw, 8);
        assert_eq!(id, identifier);
        assert_eq!(digit, check);
    }
}
