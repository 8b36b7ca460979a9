//! I/O module
//!
//! Handles command file parsing and summary output.
//!
//! # Components
//!
//! - `csv_format` - Format handling (record conversion, summary output)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, parse_amount, write_summary, CsvRecord};
pub use sync_reader::SyncReader;

use crate::types::LedgerError;
use std::path::Path;

/// Map a failure to open an input file to a LedgerError
pub(crate) fn open_error(path: &Path, error: std::io::Error) -> LedgerError {
    match error.kind() {
        std::io::ErrorKind::NotFound => LedgerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        },
    }
}
