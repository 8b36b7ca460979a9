//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. Streams
//! records from a `SyncReader` into a `Ledger` one at a time, then writes the
//! summary.

use crate::core::traits::AccountLedger;
use crate::core::Ledger;
use crate::io::csv_format::write_summary;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use card_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("commands.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut ledger = Ledger::new();
        let reader = SyncReader::new(input_path)?;

        let mut applied = 0usize;
        let mut skipped = 0usize;
        for result in reader {
            match result {
                Ok(record) => {
                    ledger.apply(&record);
                    applied += 1;
                }
                Err(e) => {
                    skipped += 1;
                    warn!(error = %e, "skipping record");
                }
            }
        }

        info!(
            applied,
            skipped,
            accounts = ledger.len(),
            "processed command file"
        );

        write_summary(&ledger.generate_summary(), output)
    }
}
