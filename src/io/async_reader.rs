//! Asynchronous CSV reader with batch interface
//!
//! Streams command records from any `futures::io::AsyncRead` source using
//! csv-async, handing them out in batches.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of CommandRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CommandRecord, LedgerError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
///
/// Rejected records are logged and counted, never returned.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    /// Data rows consumed so far; the header is line 1
    rows_read: u64,
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            rows_read: 0,
            skipped: 0,
        }
    }

    /// Read a batch of command records
    ///
    /// Reads until `batch_size` records have been accepted or the input is
    /// exhausted. Invalid records are logged with their line number and
    /// skipped.
    ///
    /// # Returns
    ///
    /// The accepted records in input order. An empty vector means the end of
    /// the input was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<CommandRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(result) => {
                    self.rows_read += 1;
                    let line = self.rows_read + 1;
                    let converted = result
                        .map_err(LedgerError::from)
                        .and_then(|csv_record| {
                            convert_csv_record(csv_record).map_err(|e| e.at_line(line))
                        });
                    match converted {
                        Ok(record) => batch.push(record),
                        Err(e) => {
                            self.skipped += 1;
                            warn!(line, error = %e, "skipping record");
                        }
                    }
                }
                None => break,
            }
        }

        batch
    }

    /// Number of records skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommandType;
    use futures::io::Cursor;

    const HEADER: &str = "command,name,amount,card_number\n";

    fn reader(rows: &str) -> AsyncReader<Cursor<Vec<u8>>> {
        AsyncReader::new(Cursor::new(format!("{}{}", HEADER, rows).into_bytes()))
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let mut async_reader = reader(
            "add,Tom,1000,4111111111111111\n\
             charge,Tom,500\n\
             credit,Lisa,100\n",
        );

        let batch = async_reader.read_batch(2).await;
        assert_eq!(
            batch,
            vec![
                CommandRecord::add("Tom", 1000, "4111111111111111"),
                CommandRecord::charge("Tom", 500),
            ]
        );

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch, vec![CommandRecord::credit("Lisa", 100)]);

        let batch = async_reader.read_batch(2).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = reader("");
        assert!(async_reader.read_batch(10).await.is_empty());
        assert_eq!(async_reader.skipped(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_records() {
        let mut async_reader = reader(
            "refund,Tom,5\n\
             charge,Tom,five\n\
             add,Tom,1000\n\
             charge,Tom,$5\n",
        );

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch, vec![CommandRecord::charge("Tom", 5)]);
        assert_eq!(async_reader.skipped(), 3);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_and_case() {
        let mut async_reader = reader("  CREDIT  ,  Quincy  ,  $200  \n");

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].command, CommandType::Credit);
        assert_eq!(batch[0].name, "Quincy");
        assert_eq!(batch[0].amount, 200);
    }
}
