//! CSV format handling for command records and summary output
//!
//! This module centralizes all input/output format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Summary serialization
//!
//! All functions except `write_summary` are pure (no I/O).

use crate::types::{CommandRecord, CommandType, LedgerError};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: command, name, amount,
/// card_number. The card number column is only filled for `add` and may be
/// omitted entirely on other rows.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub command: String,
    pub name: String,
    pub amount: Option<String>,
    pub card_number: Option<String>,
}

/// Parse a signed integer amount, allowing one currency sign
///
/// Accepts `1000`, `$1000`, `-$5` and `$-5`. Returns `None` for anything
/// else, including fractional amounts.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let normalized = if let Some(rest) = raw.strip_prefix('$') {
        rest.to_string()
    } else if let Some(rest) = raw.strip_prefix("-$") {
        format!("-{}", rest)
    } else if let Some(rest) = raw.strip_prefix("+$") {
        rest.to_string()
    } else {
        raw.to_string()
    };

    normalized.parse::<i64>().ok()
}

/// Convert a CsvRecord to a CommandRecord
///
/// This function:
/// - Parses the command string (case-insensitive) into a CommandType
/// - Parses the amount, which every command requires
/// - Requires a card number for `add`; ignores one on other commands
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// * `Ok(CommandRecord)` - Successfully converted record
/// * `Err(LedgerError)` - Why the record could not be converted
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<CommandRecord, LedgerError> {
    let CsvRecord {
        command,
        name,
        amount,
        card_number,
    } = csv_record;

    let command_type = match command.to_lowercase().as_str() {
        "add" => CommandType::Add,
        "charge" => CommandType::Charge,
        "credit" => CommandType::Credit,
        _ => return Err(LedgerError::invalid_command_type(&command, &name)),
    };

    let amount = match amount {
        Some(raw) if !raw.trim().is_empty() => {
            parse_amount(&raw).ok_or_else(|| LedgerError::invalid_amount(raw.trim(), &name))?
        }
        _ => return Err(LedgerError::missing_amount(command_type.as_str(), &name)),
    };

    let card_number = match command_type {
        CommandType::Add => match card_number {
            Some(card) if !card.trim().is_empty() => Some(card.trim().to_string()),
            _ => return Err(LedgerError::missing_card_number(&name)),
        },
        // Only account creation takes a card number
        CommandType::Charge | CommandType::Credit => None,
    };

    Ok(CommandRecord {
        command: command_type,
        name,
        amount,
        card_number,
    })
}

/// Write summary lines to output, one per line
///
/// # Arguments
///
/// * `lines` - Summary lines as produced by `generate_summary`
/// * `output` - Mutable reference to a writer
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_summary(lines: &[String], output: &mut dyn Write) -> Result<(), LedgerError> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    output.flush()?;

    Ok(())
}
