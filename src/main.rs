//! Card Ledger CLI
//!
//! Applies account commands from a CSV file and prints the account summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv
//! cargo run -- --strategy async --batch-size 500 commands.csv
//! RUST_LOG=debug cargo run -- commands.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use card_ledger::cli;
use card_ledger::logging;
use card_ledger::strategy;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_level());

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!(error = %e, "processing failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
