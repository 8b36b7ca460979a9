//! Core trait for ledger operations
//!
//! This module defines the trait abstraction that lets the single-threaded
//! `Ledger` and the lock-guarded `SharedLedger` be driven by the same
//! command-processing code.

use crate::types::{CommandRecord, CommandType};

/// Trait for applying ledger operations
///
/// Implementations absorb rejected operations as no-ops; none of these
/// methods report failure.
pub trait AccountLedger {
    /// Open (or replace) the account for an owner
    fn create_account(&mut self, name: &str, limit: i64, card_number: &str);

    /// Raise a balance, bounded by the account limit
    fn charge(&mut self, name: &str, amount: i64);

    /// Lower a balance, unbounded
    fn credit(&mut self, name: &str, amount: i64);

    /// One summary line per account in ascending key order
    fn generate_summary(&self) -> Vec<String>;

    /// Apply a parsed command record
    ///
    /// An `add` record without a card number is applied with an empty one,
    /// which fails validation and opens an invalid account.
    fn apply(&mut self, record: &CommandRecord) {
        match record.command {
            CommandType::Add => self.create_account(
                &record.name,
                record.amount,
                record.card_number.as_deref().unwrap_or_default(),
            ),
            CommandType::Charge => self.charge(&record.name, record.amount),
            CommandType::Credit => self.credit(&record.name, record.amount),
        }
    }
}

impl AccountLedger for crate::core::Ledger {
    fn create_account(&mut self, name: &str, limit: i64, card_number: &str) {
        crate::core::Ledger::create_account(self, name, limit, card_number)
    }

    fn charge(&mut self, name: &str, amount: i64) {
        crate::core::Ledger::charge(self, name, amount)
    }

    fn credit(&mut self, name: &str, amount: i64) {
        crate::core::Ledger::credit(self, name, amount)
    }

    fn generate_summary(&self) -> Vec<String> {
        crate::core::Ledger::generate_summary(self)
    }
}
