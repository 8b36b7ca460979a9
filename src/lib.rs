//! Card Ledger Library
//! # Overview
//!
//! An in-memory ledger of card accounts keyed by owner name. Card numbers are
//! checked with the Luhn checksum when an account is opened; charges are
//! bounded by a per-account limit and credits are not.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Balance, CommandRecord, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::luhn`] - Card number validation
//!   - [`core::ledger`] - Account state and charge/credit rules
//!   - [`core::shared`] - Lock-guarded ledger for concurrent callers
//!   - [`core::batch`] - Concurrent batch application
//! - [`io`] - Command file reading and summary output
//! - [`strategy`] - Sync and async processing pipelines
//! - [`logging`] - Tracing subscriber setup
//!
//! # Commands
//!
//! - **Add**: Open an account; an invalid card yields a balance of `error`
//!   and a zero limit
//! - **Charge**: Raise the balance, ignored if it would exceed the limit
//! - **Credit**: Lower the balance, which may go negative
//!
//! Operations on unknown or invalid accounts are silently ignored.
//!
//! # Example
//!
//! ```
//! use card_ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.create_account("alice", 100, "4539148803436467");
//! ledger.charge("Alice", 50);
//! ledger.charge("Alice", 60);
//! ledger.credit("Alice", 20);
//!
//! assert_eq!(ledger.generate_summary(), vec!["Alice: $30"]);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{AccountLedger, BatchProcessor, Ledger, SharedLedger};
pub use io::write_summary;
pub use types::{Account, Balance, CommandRecord, CommandType, LedgerError};
