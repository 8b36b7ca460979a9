//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `luhn` - Card number checksum validation
//! - `ledger` - Account state and charge/credit rules
//! - `shared` - The ledger behind a single lock for concurrent callers
//! - `traits` - Trait abstraction over both ledger flavours
//! - `batch` - Concurrent batch application against a shared ledger

pub mod batch;
pub mod ledger;
pub mod luhn;
pub mod shared;
pub mod traits;

pub use batch::BatchProcessor;
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use traits::AccountLedger;
