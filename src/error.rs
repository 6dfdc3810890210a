//! Error types for the bank simulator.

use crate::account::AccountNumber;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur while operating on the bank.
///
/// The compatibility methods on [`crate::Bank`] never surface these; they
/// collapse them into the boolean/sentinel results callers already expect.
#[derive(Error, Debug)]
pub enum BankError {
    /// No account is registered under this number
    #[error("unknown account {0}")]
    UnknownAccount(AccountNumber),

    /// Debit larger than the current balance
    #[error("insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountNumber,
        balance: f64,
        requested: f64,
    },

    /// Authorized users only exist on commercial accounts
    #[error("account {0} is not a commercial account")]
    NotCommercial(AccountNumber),

    /// Supplied PIN does not match the one stored on the account
    #[error("PIN mismatch for account {0}")]
    PinMismatch(AccountNumber),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid operation record
    #[error("Invalid operation at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: bank-sim <operations.csv> [--report]")]
    MissingArgument,
}
