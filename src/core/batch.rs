//! Batch processor for concurrent command application
//!
//! Partitions a batch of commands by the ledger key each one touches and
//! applies the partitions as concurrent tokio tasks against a
//! `SharedLedger`. Commands within a partition run in input order, so every
//! account sees its commands in the same order as the single-threaded path.

use crate::core::traits::AccountLedger;
use crate::core::SharedLedger;
use crate::types::{capitalize_name, CommandRecord, CommandType};
use std::collections::HashMap;
use tracing::error;

/// Ledger key a command reads or writes
///
/// `add` stores under the capitalized name; `charge` and `credit` look up
/// the name exactly as given.
pub fn target_key(record: &CommandRecord) -> String {
    match record.command {
        CommandType::Add => capitalize_name(&record.name),
        CommandType::Charge | CommandType::Credit => record.name.clone(),
    }
}

/// Applies batches of commands to a shared ledger
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    ledger: SharedLedger,
}

impl BatchProcessor {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Partition a batch by target key
    ///
    /// Each command lands in exactly one partition, and every partition keeps
    /// the relative order its commands had in the batch.
    pub fn partition_by_key(&self, batch: Vec<CommandRecord>) -> HashMap<String, Vec<CommandRecord>> {
        let mut partitions: HashMap<String, Vec<CommandRecord>> = HashMap::new();

        for record in batch {
            partitions.entry(target_key(&record)).or_default().push(record);
        }

        partitions
    }

    /// Apply one partition's commands in order
    pub fn apply_partition(&self, records: &[CommandRecord]) {
        let mut ledger = self.ledger.clone();
        for record in records {
            ledger.apply(record);
        }
    }

    /// Apply a batch, one task per partition, and wait for all of them
    ///
    /// # Returns
    ///
    /// The number of commands whose task completed. A panicking task is
    /// logged and its partition's commands are not counted.
    pub async fn process_batch(&self, batch: Vec<CommandRecord>) -> usize {
        let partitions = self.partition_by_key(batch);

        let mut tasks = Vec::with_capacity(partitions.len());
        for (_key, records) in partitions {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.apply_partition(&records);
                records.len()
            }));
        }

        let mut applied = 0;
        for task in tasks {
            match task.await {
                Ok(count) => applied += count,
                Err(e) => error!(error = %e, "batch task failed"),
            }
        }

        applied
    }
}
