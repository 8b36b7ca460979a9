//! Asynchronous batch processing strategy
//!
//! Reads commands in batches and applies each batch with the
//! `BatchProcessor`, which runs one tokio task per ledger key against a
//! lock-guarded `SharedLedger`.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (key partitioning + tasks)
//!         └── SharedLedger (one mutex over the whole ledger)
//! ```
//!
//! Batches are applied one after another, and commands for the same key stay
//! in file order inside a batch, so the summary matches the synchronous
//! strategy for every input.

use crate::core::{BatchProcessor, SharedLedger};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_summary;
use crate::io::open_error;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for batch processing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of commands per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid worker count, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()?;

        let summary = runtime.block_on(async {
            let ledger = SharedLedger::new();
            let processor = BatchProcessor::new(ledger.clone());

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| open_error(input_path, e))?;

            // csv-async reads through the futures AsyncRead traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut applied = 0usize;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                // Finish this batch before reading the next one to keep
                // per-account ordering across batch boundaries.
                applied += processor.process_batch(batch).await;
            }

            info!(
                applied,
                skipped = reader.skipped(),
                accounts = ledger.len(),
                "processed command file"
            );

            Ok::<_, LedgerError>(ledger.generate_summary())
        })?;

        write_summary(&summary, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(content: &str, config: BatchConfig) -> String {
        let file = create_temp_csv(content);
        let mut output = Vec::new();
        AsyncProcessingStrategy::new(config)
            .process(file.path(), &mut output)
            .expect("processing failed");
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::defaults(BatchConfig::new(1000, 4), 1000, 4)]
    #[case::zero_batch_size(BatchConfig::new(0, 4), 1000, 4)]
    #[case::zero_workers(BatchConfig::new(50, 0), 50, num_cpus::get())]
    fn test_batch_config_new(
        #[case] config: BatchConfig,
        #[case] batch_size: usize,
        #[case] workers: usize,
    ) {
        assert_eq!(config.batch_size, batch_size);
        assert_eq!(config.max_concurrent_batches, workers);
    }

    #[test]
    fn test_async_strategy_valid_account() {
        let output = run(
            "command,name,amount,card_number\n\
             add,alice,100,4539148803436467\n\
             charge,Alice,50\n\
             charge,Alice,60\n\
             credit,Alice,20\n",
            BatchConfig::default(),
        );
        assert_eq!(output, "Alice: $30\n");
    }

    #[test]
    fn test_async_strategy_maintains_ordering_across_batches() {
        // Batch size 2 splits every account's commands across batches.
        let output = run(
            "command,name,amount,card_number\n\
             add,tom,1000,4111111111111111\n\
             add,lisa,3000,5454545454545454\n\
             charge,Tom,500\n\
             charge,Lisa,7\n\
             charge,Tom,800\n\
             credit,Lisa,100\n\
             credit,Tom,100\n\
             charge,Tom,550\n",
            BatchConfig::new(2, 2),
        );
        // Tom: 500, 800 rejected, -100 = 400, +550 = 950.
        assert_eq!(output, "Lisa: $-93\nTom: $950\n");
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(BatchConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_async_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AsyncProcessingStrategy>();
    }
}
