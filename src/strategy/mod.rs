//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete command processing
//! pipelines, covering both CSV parsing and ledger application, so the
//! synchronous and asynchronous implementations can be selected at runtime.

use crate::cli::StrategyType;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete command processing pipelines
///
/// Each strategy reads command records from a CSV file, applies them to a
/// ledger, and writes the account summary to the output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process commands from input file and write the summary to output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The header row cannot be read
    /// - Output cannot be written
    ///
    /// Malformed records and rejected ledger operations are logged and do
    /// not cause this method to return an error.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
