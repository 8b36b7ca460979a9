//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over command records from a CSV file.
//! Delegates format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<CommandRecord, LedgerError>` for each CSV row:
//!
//! ```no_run
//! use card_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Applying command: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator,
//!   carrying the input line number

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::open_error;
use crate::types::{CommandRecord, LedgerError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time, so memory use does not grow with the file.
#[derive(Debug)]
pub struct SyncReader<R: Read = File> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
    done: bool,
}

impl SyncReader<File> {
    /// Open a command file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `IoError` for any
    /// other open failure, and `ParseError` if the header row is unreadable.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        Self::from_reader(file)
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (card_number is optional)
    /// - Use an 8KB buffer
    pub fn from_reader(source: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
            done: false,
        })
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<CommandRecord, LedgerError>;

    /// Get the next command record
    ///
    /// # Returns
    ///
    /// * `Some(Ok(CommandRecord))` - Successfully parsed record
    /// * `Some(Err(LedgerError))` - Parse or conversion error with line number
    /// * `None` - End of input reached (or an unrecoverable I/O error was
    ///   already reported)
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                let result = self
                    .record
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(|e| LedgerError::ParseError {
                        line: Some(line),
                        message: e.to_string(),
                    })
                    .and_then(|csv_record| {
                        convert_csv_record(csv_record).map_err(|e| e.at_line(line))
                    });
                Some(result)
            }
            Err(e) => {
                // I/O failures repeat forever; stop after reporting one.
                if e.is_io_error() {
                    self.done = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}
