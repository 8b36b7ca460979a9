//! Account ledger module
//!
//! This module provides the `Ledger` struct which owns every account and
//! applies account creation, charges and credits to them.
//!
//! The Ledger is responsible for:
//! - Normalizing owner names and validating card numbers on creation
//! - Applying limit-bounded charges and unbounded credits
//! - Absorbing rejected operations as no-ops
//! - Producing the ordered account summary
//!
//! Lookups by name are exact. Only `create_account` capitalizes the name it is
//! given, so `charge("alice", ..)` never reaches an account created as
//! `"alice"` (stored under `"Alice"`).

use crate::core::luhn;
use crate::types::{capitalize_name, Account, Balance, LedgerError};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory ledger of card accounts keyed by owner name
///
/// Accounts are kept in a sorted map so summaries come out in ascending
/// key order without a separate sort.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    /// Map of owner names to account states
    accounts: BTreeMap<String, Account>,
}

impl Ledger {
    /// Create a new Ledger with no accounts
    pub fn new() -> Self {
        Ledger {
            accounts: BTreeMap::new(),
        }
    }

    /// Open an account for an owner
    ///
    /// The name is capitalized to form the key. A card number that passes
    /// the Luhn check yields a zero balance and the requested limit; one
    /// that fails yields the invalid marker and a zero limit. An existing
    /// account under the same key is replaced without notice.
    ///
    /// # Arguments
    ///
    /// * `name` - Owner name, normalized before use
    /// * `limit` - Maximum balance a charge may produce
    /// * `card_number` - Card digits, stored verbatim
    pub fn create_account(&mut self, name: &str, limit: i64, card_number: &str) {
        let name = capitalize_name(name);

        let account = if luhn::is_valid(card_number) {
            debug!(name = %name, limit, "opened account");
            Account::new(name.clone(), limit, card_number.to_string())
        } else {
            debug!(name = %name, "opened account with invalid card number");
            Account::invalid(name.clone(), card_number.to_string())
        };

        if let Some(previous) = self.accounts.insert(name, account) {
            debug!(name = %previous.name, "replaced existing account");
        }
    }

    /// Look up an account by its exact key
    ///
    /// No normalization is applied, so the name must match the capitalized
    /// form used at creation.
    pub fn get_account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }

    /// Raise an account balance, bounded by its limit
    ///
    /// Does nothing if the account is absent, carries the invalid marker, or
    /// the charge would push the balance above the limit. Negative amounts
    /// are accepted and lower the balance.
    pub fn charge(&mut self, name: &str, amount: i64) {
        if let Err(e) = self.try_charge(name, amount) {
            debug!(error = %e, "charge ignored");
        }
    }

    /// Lower an account balance
    ///
    /// Does nothing if the account is absent or carries the invalid marker.
    /// There is no limit check and the balance may go negative.
    pub fn credit(&mut self, name: &str, amount: i64) {
        if let Err(e) = self.try_credit(name, amount) {
            debug!(error = %e, "credit ignored");
        }
    }

    /// Apply a charge and report the outcome
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The new balance
    /// * `Err(LedgerError)` - Why the charge was not applied; the account is
    ///   unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account is stored under `name`
    /// - The account carries the invalid marker
    /// - The new balance would exceed the limit
    /// - The new balance would overflow
    pub fn try_charge(&mut self, name: &str, amount: i64) -> Result<i64, LedgerError> {
        let account = self
            .accounts
            .get_mut(name)
            .ok_or_else(|| LedgerError::account_not_found(name))?;

        let balance = account
            .balance
            .amount()
            .ok_or_else(|| LedgerError::invalid_account(name))?;

        let projected = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("charge", name))?;

        if projected > account.limit {
            return Err(LedgerError::limit_exceeded(
                name,
                balance,
                amount,
                account.limit,
            ));
        }

        account.balance = Balance::Valid(projected);
        debug!(name, amount, balance = projected, "charge applied");

        Ok(projected)
    }

    /// Apply a credit and report the outcome
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The new balance
    /// * `Err(LedgerError)` - Why the credit was not applied; the account is
    ///   unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account is stored under `name`
    /// - The account carries the invalid marker
    /// - The new balance would overflow
    pub fn try_credit(&mut self, name: &str, amount: i64) -> Result<i64, LedgerError> {
        let account = self
            .accounts
            .get_mut(name)
            .ok_or_else(|| LedgerError::account_not_found(name))?;

        let balance = account
            .balance
            .amount()
            .ok_or_else(|| LedgerError::invalid_account(name))?;

        let new_balance = balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", name))?;

        account.balance = Balance::Valid(new_balance);
        debug!(name, amount, balance = new_balance, "credit applied");

        Ok(new_balance)
    }

    /// One line per account in ascending key order
    ///
    /// Valid accounts render as `"Name: $N"`, invalid ones as
    /// `"Name: error"`.
    pub fn generate_summary(&self) -> Vec<String> {
        self.accounts.values().map(Account::summary_line).collect()
    }

    /// All accounts in ascending key order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
