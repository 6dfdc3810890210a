//! Operation records for CSV replay and their typed representation.

use crate::account::AccountNumber;
use crate::error::{BankError, Result};
use crate::holder::{Company, Person};
use serde::Deserialize;

/// Raw operation record as read from CSV.
///
/// Every column except `type` is optional; which ones are required depends on
/// the operation.
#[derive(Debug, Default, Deserialize)]
pub struct OperationRecord {
    /// Operation type: open_consumer, open_commercial, credit, debit,
    /// authenticate, authorize, check_authorized
    #[serde(rename = "type")]
    pub op_type: String,

    pub account: Option<AccountNumber>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,

    /// Identifying number of the person or tax id of the company
    pub id: Option<i32>,

    pub pin: Option<i32>,
    pub amount: Option<f64>,
}

/// A validated operation ready to run against a bank.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    OpenConsumer {
        owner: Person,
        pin: i32,
        deposit: f64,
    },
    OpenCommercial {
        owner: Company,
        pin: i32,
        deposit: f64,
    },
    Credit {
        account: AccountNumber,
        amount: f64,
    },
    Debit {
        account: AccountNumber,
        amount: f64,
    },
    Authenticate {
        account: AccountNumber,
        pin: i32,
    },
    Authorize {
        account: AccountNumber,
        person: Person,
    },
    CheckAuthorized {
        account: AccountNumber,
        person: Person,
    },
}

impl OperationRecord {
    /// Parses the raw record into a typed operation.
    ///
    /// `row` is only used to label the error.
    pub fn parse(&self, row: usize) -> Result<Operation> {
        let op_type = self.op_type.trim().to_lowercase();

        let op = match op_type.as_str() {
            "open_consumer" => Operation::OpenConsumer {
                owner: self.person(row)?,
                pin: required(self.pin, "pin", row)?,
                deposit: required(self.amount, "amount", row)?,
            },
            "open_commercial" => Operation::OpenCommercial {
                owner: Company::new(
                    required_text(&self.company, "company", row)?,
                    required(self.id, "id", row)?,
                ),
                pin: required(self.pin, "pin", row)?,
                deposit: required(self.amount, "amount", row)?,
            },
            "credit" => Operation::Credit {
                account: required(self.account, "account", row)?,
                amount: required(self.amount, "amount", row)?,
            },
            "debit" => Operation::Debit {
                account: required(self.account, "account", row)?,
                amount: required(self.amount, "amount", row)?,
            },
            "authenticate" => Operation::Authenticate {
                account: required(self.account, "account", row)?,
                pin: required(self.pin, "pin", row)?,
            },
            "authorize" => Operation::Authorize {
                account: required(self.account, "account", row)?,
                person: self.person(row)?,
            },
            "check_authorized" => Operation::CheckAuthorized {
                account: required(self.account, "account", row)?,
                person: self.person(row)?,
            },
            other => {
                return Err(BankError::InvalidRecord {
                    row,
                    message: format!("unknown operation type '{}'", other),
                })
            }
        };

        Ok(op)
    }

    fn person(&self, row: usize) -> Result<Person> {
        Ok(Person::new(
            required_text(&self.first_name, "first_name", row)?,
            required_text(&self.last_name, "last_name", row)?,
            required(self.id, "id", row)?,
        ))
    }
}

fn missing(field: &str, row: usize) -> BankError {
    BankError::InvalidRecord {
        row,
        message: format!("missing {}", field),
    }
}

fn required<T>(value: Option<T>, field: &str, row: usize) -> Result<T> {
    value.ok_or_else(|| missing(field, row))
}

fn required_text<'a>(value: &'a Option<String>, field: &str, row: usize) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(missing(field, row)),
    }
}
