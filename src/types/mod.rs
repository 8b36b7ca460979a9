//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and balance types
//! - `command`: Input command types
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;

pub use account::{capitalize_name, Account, Balance, INVALID_MARKER};
pub use command::{CommandRecord, CommandType};
pub use error::LedgerError;
