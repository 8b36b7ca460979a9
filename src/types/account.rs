//! Account-related types for the card ledger
//!
//! This module defines the Account structure, the Balance sum type that
//! distinguishes usable accounts from ones opened with a bad card, and the
//! owner-name normalization applied when accounts are created.

use std::fmt;

/// Text rendered in place of a balance for accounts opened with an invalid card
pub const INVALID_MARKER: &str = "error";

/// Account balance
///
/// An account opened with a card that fails the checksum carries
/// `Invalid` for the rest of its life; no transaction moves it back to
/// `Valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Usable balance in whole currency units (may be negative)
    Valid(i64),

    /// Invalid marker for accounts whose card failed validation
    Invalid,
}

impl Balance {
    /// Returns the numeric balance, or `None` for the invalid marker
    pub fn amount(&self) -> Option<i64> {
        match self {
            Balance::Valid(amount) => Some(*amount),
            Balance::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Balance::Valid(_))
    }
}

impl fmt::Display for Balance {
    /// Valid balances render with a dollar sign (`$30`, `$-5`), invalid
    /// ones as the bare marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Valid(amount) => write!(f, "${}", amount),
            Balance::Invalid => f.write_str(INVALID_MARKER),
        }
    }
}

/// Card account state
///
/// Represents one owner's account: the owner name it is keyed by, the
/// running balance, the charge limit and the card number it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Owner name, capitalized on creation and used as the ledger key
    pub name: String,

    /// Current balance, or the invalid marker
    pub balance: Balance,

    /// Maximum balance a charge may produce
    ///
    /// Zero for accounts opened with an invalid card, whatever limit was
    /// requested.
    pub limit: i64,

    /// Card number exactly as supplied on creation
    pub card_number: String,
}

impl Account {
    /// Create an account with a zero balance and the given limit
    pub fn new(name: String, limit: i64, card_number: String) -> Self {
        Account {
            name,
            balance: Balance::Valid(0),
            limit,
            card_number,
        }
    }

    /// Create an account carrying the invalid marker and a zero limit
    pub fn invalid(name: String, card_number: String) -> Self {
        Account {
            name,
            balance: Balance::Invalid,
            limit: 0,
            card_number,
        }
    }

    /// Summary line for this account: `"Name: $N"` or `"Name: error"`
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.name, self.balance)
    }
}

/// Normalize an owner name the way account creation keys it
///
/// The first character is upper-cased and the rest lower-cased, so
/// `"aLICE"` becomes `"Alice"`. An empty name stays empty.
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lowercase("alice", "Alice")]
    #[case::uppercase("BOB", "Bob")]
    #[case::mixed("mcDONALD", "Mcdonald")]
    #[case::already_normalized("Carol", "Carol")]
    #[case::single_char("d", "D")]
    #[case::empty("", "")]
    #[case::leading_digit("3po", "3po")]
    #[case::non_ascii("élodie", "Élodie")]
    fn test_capitalize_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_name(input), expected);
    }

    #[rstest]
    #[case::positive(Balance::Valid(30), "$30")]
    #[case::zero(Balance::Valid(0), "$0")]
    #[case::negative(Balance::Valid(-30), "$-30")]
    #[case::invalid(Balance::Invalid, "error")]
    fn test_balance_display(#[case] balance: Balance, #[case] expected: &str) {
        assert_eq!(balance.to_string(), expected);
    }

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = Account::new("Alice".to_string(), 100, "4111111111111111".to_string());
        assert_eq!(account.balance, Balance::Valid(0));
        assert_eq!(account.limit, 100);
        assert_eq!(account.summary_line(), "Alice: $0");
    }

    #[test]
    fn test_invalid_account_has_zero_limit() {
        let account = Account::invalid("Bob".to_string(), "1234".to_string());
        assert_eq!(account.balance, Balance::Invalid);
        assert_eq!(account.balance.amount(), None);
        assert!(!account.balance.is_valid());
        assert_eq!(account.limit, 0);
        assert_eq!(account.summary_line(), "Bob: error");
    }
}
