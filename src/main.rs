//! Bank Simulator CLI
//!
//! Replays a CSV script of bank operations and prints the final account
//! states, or the average balance report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > accounts.csv
//! cargo run -- operations.csv --report > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_simulator::{BankError, ReplayEngine, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let report = args.iter().any(|a| a == "--report");
    let input_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .ok_or(BankError::MissingArgument)?;

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut engine = ReplayEngine::new();
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    if report {
        engine.write_report(handle)?;
    } else {
        engine.write_output(handle)?;
    }

    Ok(())
}
