//! Command-related types for the card ledger
//!
//! This module defines the command kinds accepted from input files and the
//! parsed record that is applied to a ledger.

use serde::{Deserialize, Serialize};

/// Commands supported by the ledger
///
/// Each variant maps to one ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Open (or overwrite) an account for an owner
    ///
    /// Carries the limit in the amount field and requires a card number.
    Add,

    /// Raise an account balance, bounded by its limit
    Charge,

    /// Lower an account balance, unbounded
    Credit,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Add => "add",
            CommandType::Charge => "charge",
            CommandType::Credit => "credit",
        }
    }
}

/// Parsed command record
///
/// Represents a single command as read from an input file. `card_number`
/// is only present for `Add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Which ledger operation to run
    pub command: CommandType,

    /// Owner name exactly as written in the input
    pub name: String,

    /// Limit for `Add`, transaction amount for `Charge` and `Credit`
    pub amount: i64,

    /// Card number for `Add`
    pub card_number: Option<String>,
}

impl CommandRecord {
    pub fn add(name: &str, limit: i64, card_number: &str) -> Self {
        CommandRecord {
            command: CommandType::Add,
            name: name.to_string(),
            amount: limit,
            card_number: Some(card_number.to_string()),
        }
    }

    pub fn charge(name: &str, amount: i64) -> Self {
        CommandRecord {
            command: CommandType::Charge,
            name: name.to_string(),
            amount,
            card_number: None,
        }
    }

    pub fn credit(name: &str, amount: i64) -> Self {
        CommandRecord {
            command: CommandType::Credit,
            name: name.to_string(),
            amount,
            card_number: None,
        }
    }
}
