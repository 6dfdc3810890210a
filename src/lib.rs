//! # Bank Simulator
//!
//! An in-memory bank that opens consumer and commercial accounts, moves money
//! in and out of them, checks PINs, manages authorized users on commercial
//! accounts and reports average balances per account category.
//!
//! ## Design Principles
//!
//! - **Typed errors first**: every operation has a `try_*` form returning
//!   [`BankError`]; the boolean/sentinel methods are wrappers over it
//! - **Closed account variants**: authorized users are a capability of the
//!   commercial variant, queried rather than type-checked
//! - **Stable numbering**: account numbers come from a dedicated counter
//!
//! ## Example
//!
//! ```
//! use bank_simulator::{Bank, Company, Person};
//!
//! let mut bank = Bank::new();
//! let alice = bank.open_consumer_account(Person::new("Alice", "Smith", 1), 1234, 100.0);
//! let acme = bank.open_commercial_account(Company::new("Acme", 10), 5678, 500.0);
//!
//! bank.credit(alice, 50.0);
//! assert!(!bank.debit(acme, 600.0));
//! assert_eq!(bank.get_balance(alice), 150.0);
//! ```

pub mod account;
pub mod bank;
pub mod error;
pub mod holder;
pub mod operation;
pub mod replay;
pub mod report;

pub use account::{Account, AccountCategory, AccountNumber, AuthorizedUsers};
pub use bank::{Bank, UNKNOWN_BALANCE};
pub use error::{BankError, Result};
pub use holder::{AccountHolder, Company, Holder, Person};
pub use operation::{Operation, OperationRecord};
pub use replay::ReplayEngine;
pub use report::{BalanceReport, RunningMean};
