//! Error types for the card ledger
//!
//! This module defines all error types that can occur while reading commands
//! and applying them to a ledger.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Malformed CSV, unknown commands, bad amounts, etc.
//! - **Ledger Rejections**: Unknown account, invalid account, limit exceeded
//! - **Arithmetic Errors**: Overflow in balance calculations
//!
//! Ledger rejections are the result codes behind operations that are
//! otherwise silent no-ops; see `Ledger::try_charge` and `Ledger::try_credit`.

use thiserror::Error;

/// Main error type for the card ledger
///
/// Each variant includes the context needed to diagnose which record or
/// account was involved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    ///
    /// This is typically a fatal error (file permissions, closed pipe, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A well-formed CSV row that could not be turned into a command
    ///
    /// Wraps the conversion error with the input line it came from.
    #[error("Line {line}: {source}")]
    InvalidRecord {
        /// Line number of the rejected record (header is line 1)
        line: u64,
        /// Why the record was rejected
        source: Box<LedgerError>,
    },

    /// Unknown command name encountered
    #[error("Invalid command '{command}' for '{name}'")]
    InvalidCommandType {
        /// The unrecognized command string
        command: String,
        /// Owner name on the record
        name: String,
    },

    /// Amount field is missing
    ///
    /// Every command needs one: the limit for `add`, the transaction
    /// amount for `charge` and `credit`.
    #[error("{command} command for '{name}' requires an amount")]
    MissingAmount {
        /// Command that requires an amount
        command: String,
        /// Owner name on the record
        name: String,
    },

    /// Amount field is not a signed integer
    #[error("Invalid amount '{amount}' for '{name}'")]
    InvalidAmount {
        /// The malformed amount string
        amount: String,
        /// Owner name on the record
        name: String,
    },

    /// `add` command without a card number
    #[error("add command for '{name}' requires a card number")]
    MissingCardNumber {
        /// Owner name on the record
        name: String,
    },

    /// No account is stored under the given key
    ///
    /// Lookups are exact, so this is also what a non-capitalized name
    /// produces.
    #[error("Account '{name}' not found")]
    AccountNotFound {
        /// Key that was looked up
        name: String,
    },

    /// The account was opened with a card that failed validation
    #[error("Account '{name}' has an invalid card number")]
    InvalidAccount {
        /// Owner name of the invalid account
        name: String,
    },

    /// A charge would raise the balance above the account limit
    #[error("Charge of {amount} for '{name}' exceeds limit {limit} (balance {balance})")]
    LimitExceeded {
        /// Owner name
        name: String,
        /// Balance before the charge
        balance: i64,
        /// Requested charge
        amount: i64,
        /// Account limit
        limit: i64,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance representable.
    #[error("Arithmetic overflow in {operation} for '{name}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Owner name
        name: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv_async::Error to LedgerError
impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        LedgerError::ParseError {
            line: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(name: &str) -> Self {
        LedgerError::AccountNotFound {
            name: name.to_string(),
        }
    }

    /// Create an InvalidAccount error
    pub fn invalid_account(name: &str) -> Self {
        LedgerError::InvalidAccount {
            name: name.to_string(),
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(name: &str, balance: i64, amount: i64, limit: i64) -> Self {
        LedgerError::LimitExceeded {
            name: name.to_string(),
            balance,
            amount,
            limit,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, name: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            name: name.to_string(),
        }
    }

    /// Create an InvalidCommandType error
    pub fn invalid_command_type(command: &str, name: &str) -> Self {
        LedgerError::InvalidCommandType {
            command: command.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(command: &str, name: &str) -> Self {
        LedgerError::MissingAmount {
            command: command.to_string(),
            name: name.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, name: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a MissingCardNumber error
    pub fn missing_card_number(name: &str) -> Self {
        LedgerError::MissingCardNumber {
            name: name.to_string(),
        }
    }

    /// Attach an input line number to a conversion error
    pub fn at_line(self, line: u64) -> Self {
        LedgerError::InvalidRecord {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "commands.csv".to_string() },
        "File not found: commands.csv"
    )]
    #[case::io_error(
        LedgerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_command_type(
        LedgerError::InvalidCommandType { command: "refund".to_string(), name: "Tom".to_string() },
        "Invalid command 'refund' for 'Tom'"
    )]
    #[case::missing_amount(
        LedgerError::MissingAmount { command: "charge".to_string(), name: "Tom".to_string() },
        "charge command for 'Tom' requires an amount"
    )]
    #[case::missing_card_number(
        LedgerError::MissingCardNumber { name: "Tom".to_string() },
        "add command for 'Tom' requires a card number"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { name: "tom".to_string() },
        "Account 'tom' not found"
    )]
    #[case::invalid_account(
        LedgerError::InvalidAccount { name: "Bob".to_string() },
        "Account 'Bob' has an invalid card number"
    )]
    #[case::limit_exceeded(
        LedgerError::LimitExceeded { name: "Alice".to_string(), balance: 50, amount: 60, limit: 100 },
        "Charge of 60 for 'Alice' exceeds limit 100 (balance 50)"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "credit".to_string(), name: "Alice".to_string() },
        "Arithmetic overflow in credit for 'Alice'"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::limit_exceeded(
        LedgerError::limit_exceeded("Alice", 50, 60, 100),
        LedgerError::LimitExceeded { name: "Alice".to_string(), balance: 50, amount: 60, limit: 100 }
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("tom"),
        LedgerError::AccountNotFound { name: "tom".to_string() }
    )]
    #[case::invalid_amount(
        LedgerError::invalid_amount("ten", "Tom"),
        LedgerError::InvalidAmount { amount: "ten".to_string(), name: "Tom".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_at_line_wraps_source() {
        let error = LedgerError::missing_card_number("Tom").at_line(3);
        assert_eq!(
            error.to_string(),
            "Line 3: add command for 'Tom' requires a card number"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
