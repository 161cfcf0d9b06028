//! Transaction code classification
//!
//! The second digit of an Entry Detail transaction code says which way money
//! moves: 1, 2 or 3 for a credit (deposit), 6, 7 or 8 for a debit (withdrawal).

/// Direction of an entry, derived from its transaction code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Funds deposited into the receiver's account
    Credit,
    /// Funds withdrawn from the receiver's account
    Debit,
}

impl Direction {
    /// Classify a transaction code by its second digit
    ///
    /// Returns `None` for anything that is not a two digit code, and for codes
    /// whose second digit is neither a credit nor a debit digit.
    pub fn from_transaction_code(code: u8) -> Option<Self> {
        if !(10..=99).contains(&code) {
            return None;
        }
        match code % 10 {
            1..=3 => Some(Direction::Credit),
            6..=8 => Some(Direction::Debit),
            _ => None,
        }
    }

    /// One letter code used in reports: "C" or "D"
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "C",
            Direction::Debit => "D",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::checking_credit(22, Some(Direction::Credit))]
    #[case::checking_credit_prenote(23, Some(Direction::Credit))]
    #[case::checking_debit(27, Some(Direction::Debit))]
    #[case::checking_debit_prenote(28, Some(Direction::Debit))]
    #[case::savings_credit(32, Some(Direction::Credit))]
    #[case::savings_debit(37, Some(Direction::Debit))]
    #[case::unclassified(29, None)]
    #[case::zero(0, None)]
    #[case::single_digit(2, None)]
    #[case::three_digits(122, None)]
    fn test_from_transaction_code(#[case] code: u8, #[case] expected: Option<Direction>) {
        assert_eq!(Direction::from_transaction_code(code), expected);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Direction::Credit.as_str(), "C");
        assert_eq!(Direction::Debit.as_str(), "D");
    }
}
