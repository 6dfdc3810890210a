//! Account model and operations.
//!
//! An account is one of a closed set of variants. Only the commercial
//! variant carries authorized secondary users; callers reach that capability
//! through [`Account::authorized_users_mut`] instead of inspecting the variant.

use crate::error::{BankError, Result};
use crate::holder::{Company, Holder, Person};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Sequential account identifier assigned by the bank, starting at 1.
pub type AccountNumber = u64;

/// Reporting category of an account. Doubles as the variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AccountCategory {
    #[serde(rename = "ConsumerAccount")]
    Consumer,
    #[serde(rename = "CommercialAccount")]
    Commercial,
}

impl AccountCategory {
    /// Every category, in report order.
    pub const ALL: [AccountCategory; 2] = [AccountCategory::Consumer, AccountCategory::Commercial];

    /// Legacy label used as the key of the string-keyed balance report.
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::Consumer => "ConsumerAccount",
            AccountCategory::Commercial => "CommercialAccount",
        }
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// People granted secondary access to a commercial account.
#[derive(Debug, Clone, Default)]
pub struct AuthorizedUsers {
    users: HashSet<Person>,
}

impl AuthorizedUsers {
    /// Adds a person. Adding someone already present changes nothing.
    pub fn add(&mut self, person: Person) -> bool {
        self.users.insert(person)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.users.contains(person)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Variant-specific account data.
#[derive(Debug, Clone)]
enum AccountKind {
    /// Personal account owned by a single person.
    Consumer { owner: Person },

    /// Business account owned by a company, with optional authorized users.
    Commercial {
        owner: Company,
        authorized: AuthorizedUsers,
    },
}

/// A bank account.
///
/// # Invariants
///
/// - `number`, `pin` and the owner never change after construction
/// - A debit never takes the balance below zero; only negative starting
///   deposits or negative credits can
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    pin: i32,
    balance: f64,
    kind: AccountKind,
}

impl Account {
    /// Creates a consumer account owned by `owner`.
    pub fn consumer(number: AccountNumber, owner: Person, pin: i32, starting_deposit: f64) -> Self {
        Account {
            number,
            pin,
            balance: starting_deposit,
            kind: AccountKind::Consumer { owner },
        }
    }

    /// Creates a commercial account owned by `owner` with no authorized users.
    pub fn commercial(
        number: AccountNumber,
        owner: Company,
        pin: i32,
        starting_deposit: f64,
    ) -> Self {
        Account {
            number,
            pin,
            balance: starting_deposit,
            kind: AccountKind::Commercial {
                owner,
                authorized: AuthorizedUsers::default(),
            },
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn category(&self) -> AccountCategory {
        match self.kind {
            AccountKind::Consumer { .. } => AccountCategory::Consumer,
            AccountKind::Commercial { .. } => AccountCategory::Commercial,
        }
    }

    pub fn holder(&self) -> Holder<'_> {
        match &self.kind {
            AccountKind::Consumer { owner } => Holder::Person(owner),
            AccountKind::Commercial { owner, .. } => Holder::Company(owner),
        }
    }

    /// Adds `amount` to the balance. The amount is not validated.
    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Withdraws `amount` if the balance covers it.
    ///
    /// Succeeds only when `balance >= amount` holds, so a NaN on either side
    /// is rejected. On failure the balance is left untouched.
    pub fn debit(&mut self, amount: f64) -> Result<()> {
        if self.balance >= amount {
            self.balance -= amount;
            return Ok(());
        }

        Err(BankError::InsufficientFunds {
            account: self.number,
            balance: self.balance,
            requested: amount,
        })
    }

    pub fn validate_pin(&self, pin: i32) -> bool {
        self.pin == pin
    }

    /// Authorized users, if this kind of account supports them.
    pub fn authorized_users(&self) -> Option<&AuthorizedUsers> {
        match &self.kind {
            AccountKind::Commercial { authorized, .. } => Some(authorized),
            AccountKind::Consumer { .. } => None,
        }
    }

    /// Mutable access to authorized users, if this kind of account supports them.
    pub fn authorized_users_mut(&mut self) -> Option<&mut AuthorizedUsers> {
        match &mut self.kind {
            AccountKind::Commercial { authorized, .. } => Some(authorized),
            AccountKind::Consumer { .. } => None,
        }
    }
}
