//! Replays a CSV script of operations against a bank.
//!
//! Records are applied in file order. Bad records are logged and skipped so
//! one typo does not abort the whole script.

use crate::account::{AccountCategory, AccountNumber};
use crate::bank::Bank;
use crate::error::{BankError, Result};
use crate::operation::{Operation, OperationRecord};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};

/// One line of the account state output.
#[derive(Debug, Serialize)]
struct AccountRow {
    account: AccountNumber,
    category: AccountCategory,
    holder: String,
    balance: String,
}

/// Drives a [`Bank`] from a stream of operation records.
pub struct ReplayEngine {
    bank: Bank,
}

impl ReplayEngine {
    /// Creates an engine over an empty bank.
    pub fn new() -> Self {
        ReplayEngine { bank: Bank::new() }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Applies every operation in `reader` in order.
    ///
    /// Unparseable records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<OperationRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result.map_err(BankError::from).and_then(|r| r.parse(row_num)) {
                Ok(op) => self.apply(op, row_num),
                Err(e) => warn!("Row {}: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Runs one operation. Rejections are logged at debug level.
    pub fn apply(&mut self, op: Operation, row: usize) {
        match op {
            Operation::OpenConsumer {
                owner,
                pin,
                deposit,
            } => {
                let number = self.bank.open_consumer_account(owner, pin, deposit);
                debug!("Row {}: Opened consumer account {}", row, number);
            }
            Operation::OpenCommercial {
                owner,
                pin,
                deposit,
            } => {
                let number = self.bank.open_commercial_account(owner, pin, deposit);
                debug!("Row {}: Opened commercial account {}", row, number);
            }
            Operation::Credit { account, amount } => {
                if let Err(e) = self.bank.try_credit(account, amount) {
                    debug!("Row {}: Credit rejected: {}", row, e);
                }
            }
            Operation::Debit { account, amount } => {
                if let Err(e) = self.bank.try_debit(account, amount) {
                    debug!("Row {}: Debit rejected: {}", row, e);
                }
            }
            Operation::Authenticate { account, pin } => {
                match self.bank.try_authenticate_user(account, pin) {
                    Ok(()) => debug!("Row {}: Authenticated account {}", row, account),
                    Err(e) => debug!("Row {}: Authentication failed: {}", row, e),
                }
            }
            Operation::Authorize { account, person } => {
                if let Err(e) = self.bank.try_add_authorized_user(account, &person) {
                    debug!("Row {}: Authorization rejected: {}", row, e);
                }
            }
            Operation::CheckAuthorized { account, person } => {
                match self.bank.try_check_authorized_user(account, &person) {
                    Ok(authorized) => debug!(
                        "Row {}: {} authorized on account {}: {}",
                        row, person, account, authorized
                    ),
                    Err(e) => debug!("Row {}: Authorization check failed: {}", row, e),
                }
            }
        }
    }

    /// Writes final account states to CSV, in account-number order.
    ///
    /// Balances are formatted with exactly 2 decimal places.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        // header is written by hand so an empty bank still gets one
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(["account", "category", "holder", "balance"])?;

        for account in self.bank.accounts() {
            csv_writer.serialize(AccountRow {
                account: account.number(),
                category: account.category(),
                holder: account.holder().to_string(),
                balance: format!("{:.2}", account.balance()),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the average balance report to CSV.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        self.bank.average_balance_report().write_csv(writer)
    }
}

impl Default for ReplayEngine {
    fn default() -> Self {
        Self::new()
    }
}
