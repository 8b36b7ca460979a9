//! Lock-guarded ledger for concurrent callers
//!
//! `SharedLedger` puts a whole `Ledger` behind a single mutex. Every
//! operation holds the lock for its full duration, so operations are applied
//! one at a time in the order the lock is acquired. Clones share the same
//! underlying ledger.

use crate::core::traits::AccountLedger;
use crate::core::Ledger;
use crate::types::{Account, LedgerError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe handle to a single ledger
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Create a handle to a new, empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing ledger
    pub fn from_ledger(ledger: Ledger) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // A panic inside a ledger operation cannot leave a half-written account:
    // each operation writes at most one map entry as its last step.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_account(&self, name: &str, limit: i64, card_number: &str) {
        self.lock().create_account(name, limit, card_number);
    }

    /// Copy of the account stored under the exact key, if any
    pub fn get_account(&self, name: &str) -> Option<Account> {
        self.lock().get_account(name).cloned()
    }

    pub fn charge(&self, name: &str, amount: i64) {
        self.lock().charge(name, amount);
    }

    pub fn credit(&self, name: &str, amount: i64) {
        self.lock().credit(name, amount);
    }

    pub fn try_charge(&self, name: &str, amount: i64) -> Result<i64, LedgerError> {
        self.lock().try_charge(name, amount)
    }

    pub fn try_credit(&self, name: &str, amount: i64) -> Result<i64, LedgerError> {
        self.lock().try_credit(name, amount)
    }

    pub fn generate_summary(&self) -> Vec<String> {
        self.lock().generate_summary()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current ledger state
    pub fn snapshot(&self) -> Ledger {
        self.lock().clone()
    }
}

impl AccountLedger for SharedLedger {
    fn create_account(&mut self, name: &str, limit: i64, card_number: &str) {
        SharedLedger::create_account(self, name, limit, card_number)
    }

    fn charge(&mut self, name: &str, amount: i64) {
        SharedLedger::charge(self, name, amount)
    }

    fn credit(&mut self, name: &str, amount: i64) {
        SharedLedger::credit(self, name, amount)
    }

    fn generate_summary(&self) -> Vec<String> {
        SharedLedger::generate_summary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Balance;
    use std::thread;

    #[test]
    fn test_shared_ledger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedLedger>();
    }

    #[test]
    fn test_clones_share_state() {
        let ledger = SharedLedger::new();
        let other = ledger.clone();

        ledger.create_account("alice", 100, "4539148803436467");
        other.charge("Alice", 40);

        assert_eq!(
            ledger.get_account("Alice").unwrap().balance,
            Balance::Valid(40)
        );
        assert_eq!(ledger.len(), 1);
        assert!(!other.is_empty());
    }

    #[test]
    fn test_concurrent_charges_respect_limit() {
        let ledger = SharedLedger::new();
        ledger.create_account("alice", 1_000, "4539148803436467");

        thread::scope(|scope| {
            for _ in 0..8 {
                let ledger = ledger.clone();
                scope.spawn(move || {
                    for _ in 0..500 {
                        ledger.charge("Alice", 1);
                    }
                });
            }
        });

        // 4_000 attempted, only the first 1_000 fit under the limit.
        assert_eq!(
            ledger.get_account("Alice").unwrap().balance,
            Balance::Valid(1_000)
        );
        assert!(ledger.try_charge("Alice", 1).is_err());
    }

    #[test]
    fn test_concurrent_credits_all_apply() {
        let ledger = SharedLedger::new();
        ledger.create_account("bob", 0, "4111111111111111");

        thread::scope(|scope| {
            for _ in 0..4 {
                let ledger = ledger.clone();
                scope.spawn(move || {
                    for _ in 0..250 {
                        ledger.credit("Bob", 2);
                    }
                });
            }
        });

        assert_eq!(ledger.try_credit("Bob", 0), Ok(-2_000));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut seeded = Ledger::new();
        seeded.create_account("carol", 10, "4111111111111111");
        let ledger = SharedLedger::from_ledger(seeded);

        let snapshot = ledger.snapshot();
        ledger.charge("Carol", 5);

        assert_eq!(
            snapshot.get_account("Carol").unwrap().balance,
            Balance::Valid(0)
        );
        assert_eq!(ledger.generate_summary(), vec!["Carol: $5"]);
    }
}
