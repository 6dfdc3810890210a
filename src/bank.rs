//! The bank: registry of all accounts.
//!
//! Every operation exists twice. The `try_*` methods report failures through
//! [`BankError`]; the plain methods keep the boolean/sentinel contract
//! (`-1.0` for an unknown balance, `false` or a silent no-op otherwise) and
//! are thin wrappers over the typed ones.

use crate::account::{Account, AccountNumber};
use crate::error::{BankError, Result};
use crate::holder::{Company, Person};
use crate::report::BalanceReport;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Balance reported by [`Bank::get_balance`] for an unknown account.
pub const UNKNOWN_BALANCE: f64 = -1.0;

/// In-memory account registry.
///
/// Account numbers come from a dedicated counter, so they stay unique and
/// sequential independently of how many accounts are stored. Accounts are
/// never removed.
#[derive(Debug)]
pub struct Bank {
    /// Accounts indexed by account number; iteration follows opening order.
    accounts: BTreeMap<AccountNumber, Account>,

    /// Number handed to the next opened account.
    next_number: AccountNumber,
}

impl Bank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Bank {
            accounts: BTreeMap::new(),
            next_number: 1,
        }
    }

    fn allocate_number(&mut self) -> AccountNumber {
        let number = self.next_number;
        self.next_number += 1;
        number
    }

    fn register(&mut self, account: Account) -> AccountNumber {
        let number = account.number();
        debug!(
            "Opened {} {} for {} with balance {}",
            account.category(),
            number,
            account.holder(),
            account.balance()
        );
        self.accounts.insert(number, account);
        number
    }

    /// Opens a commercial account and returns its number.
    ///
    /// Neither the PIN nor the deposit is validated; negative deposits are
    /// accepted as-is.
    pub fn open_commercial_account(
        &mut self,
        company: Company,
        pin: i32,
        starting_deposit: f64,
    ) -> AccountNumber {
        let number = self.allocate_number();
        self.register(Account::commercial(number, company, pin, starting_deposit))
    }

    /// Opens a consumer account and returns its number.
    pub fn open_consumer_account(
        &mut self,
        person: Person,
        pin: i32,
        starting_deposit: f64,
    ) -> AccountNumber {
        let number = self.allocate_number();
        self.register(Account::consumer(number, person, pin, starting_deposit))
    }

    /// Looks up an account.
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    fn try_account(&self, number: AccountNumber) -> Result<&Account> {
        self.accounts
            .get(&number)
            .ok_or(BankError::UnknownAccount(number))
    }

    fn try_account_mut(&mut self, number: AccountNumber) -> Result<&mut Account> {
        self.accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount(number))
    }

    /// All accounts in account-number order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn try_balance(&self, number: AccountNumber) -> Result<f64> {
        Ok(self.try_account(number)?.balance())
    }

    /// Balance of an account, or [`UNKNOWN_BALANCE`] if there is none.
    pub fn get_balance(&self, number: AccountNumber) -> f64 {
        self.try_balance(number).unwrap_or_else(|e| {
            debug!("Balance lookup failed: {}", e);
            UNKNOWN_BALANCE
        })
    }

    pub fn try_credit(&mut self, number: AccountNumber, amount: f64) -> Result<()> {
        self.try_account_mut(number)?.credit(amount);
        debug!("Credited {} to account {}", amount, number);
        Ok(())
    }

    /// Adds `amount` to an account. Unknown accounts are ignored.
    pub fn credit(&mut self, number: AccountNumber, amount: f64) {
        if let Err(e) = self.try_credit(number, amount) {
            debug!("Credit ignored: {}", e);
        }
    }

    pub fn try_debit(&mut self, number: AccountNumber, amount: f64) -> Result<()> {
        self.try_account_mut(number)?.debit(amount)?;
        debug!("Debited {} from account {}", amount, number);
        Ok(())
    }

    /// Withdraws `amount` if the account exists and can cover it.
    pub fn debit(&mut self, number: AccountNumber, amount: f64) -> bool {
        match self.try_debit(number, amount) {
            Ok(()) => true,
            Err(e) => {
                debug!("Debit rejected: {}", e);
                false
            }
        }
    }

    pub fn try_authenticate_user(&self, number: AccountNumber, pin: i32) -> Result<()> {
        if self.try_account(number)?.validate_pin(pin) {
            Ok(())
        } else {
            Err(BankError::PinMismatch(number))
        }
    }

    /// Whether `pin` unlocks the account. False for unknown accounts.
    pub fn authenticate_user(&self, number: AccountNumber, pin: i32) -> bool {
        self.try_authenticate_user(number, pin).is_ok()
    }

    /// Grants `person` secondary access to a commercial account.
    ///
    /// Returns whether the person was newly added.
    pub fn try_add_authorized_user(
        &mut self,
        number: AccountNumber,
        person: &Person,
    ) -> Result<bool> {
        let users = self
            .try_account_mut(number)?
            .authorized_users_mut()
            .ok_or(BankError::NotCommercial(number))?;

        let added = users.add(person.clone());
        if added {
            debug!("Authorized {} on account {}", person, number);
        }
        Ok(added)
    }

    /// Grants secondary access. No-op for unknown or consumer accounts, or
    /// when no person is given.
    pub fn add_authorized_user(&mut self, number: AccountNumber, person: Option<&Person>) {
        let Some(person) = person else {
            debug!("No person given to authorize on account {}", number);
            return;
        };
        if let Err(e) = self.try_add_authorized_user(number, person) {
            debug!("Authorization ignored: {}", e);
        }
    }

    pub fn try_check_authorized_user(
        &self,
        number: AccountNumber,
        person: &Person,
    ) -> Result<bool> {
        let users = self
            .try_account(number)?
            .authorized_users()
            .ok_or(BankError::NotCommercial(number))?;
        Ok(users.contains(person))
    }

    /// Whether `person` is authorized on a commercial account. False for
    /// unknown or consumer accounts, or when no person is given.
    pub fn check_authorized_user(&self, number: AccountNumber, person: Option<&Person>) -> bool {
        person.map_or(false, |p| {
            self.try_check_authorized_user(number, p).unwrap_or(false)
        })
    }

    /// Average balance per account category.
    pub fn average_balance_report(&self) -> BalanceReport {
        BalanceReport::from_accounts(self.accounts())
    }

    /// Average balance keyed by `"ConsumerAccount"` and `"CommercialAccount"`.
    pub fn get_average_balance_report(&self) -> HashMap<String, f64> {
        self.average_balance_report().to_label_map()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountCategory;

    fn alice() -> Person {
        Person::new("Alice", "Smith", 1)
    }

    fn acme() -> Company {
        Company::new("Acme", 100)
    }

    #[test]
    fn test_numbers_are_sequential_across_kinds() {
        let mut bank = Bank::new();
        assert_eq!(bank.open_consumer_account(alice(), 1, 0.0), 1);
        assert_eq!(bank.open_commercial_account(acme(), 2, 0.0), 2);
        assert_eq!(bank.open_consumer_account(alice(), 3, 0.0), 3);
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn test_unknown_balance_sentinel() {
        let bank = Bank::new();
        assert_eq!(bank.get_balance(1), -1.0);
        assert!(matches!(
            bank.try_balance(1),
            Err(BankError::UnknownAccount(1))
        ));
    }

    #[test]
    fn test_credit_unknown_account_is_noop() {
        let mut bank = Bank::new();
        bank.credit(9, 10.0);
        assert!(bank.is_empty());
        assert!(bank.try_credit(9, 10.0).is_err());
    }

    #[test]
    fn test_debit_unknown_account_fails() {
        let mut bank = Bank::new();
        assert!(!bank.debit(1, 1.0));
    }

    #[test]
    fn test_typed_debit_reports_insufficient_funds() {
        let mut bank = Bank::new();
        let n = bank.open_consumer_account(alice(), 1234, 5.0);

        assert!(matches!(
            bank.try_debit(n, 6.0),
            Err(BankError::InsufficientFunds { account, .. }) if account == n
        ));
        assert_eq!(bank.get_balance(n), 5.0);
    }

    #[test]
    fn test_authenticate() {
        let mut bank = Bank::new();
        let n = bank.open_consumer_account(alice(), 1234, 0.0);

        assert!(bank.authenticate_user(n, 1234));
        assert!(!bank.authenticate_user(n, 1111));
        assert!(!bank.authenticate_user(n + 1, 1234));
        assert!(matches!(
            bank.try_authenticate_user(n, 1111),
            Err(BankError::PinMismatch(_))
        ));
    }

    #[test]
    fn test_authorized_users_on_commercial_account() {
        let mut bank = Bank::new();
        let n = bank.open_commercial_account(acme(), 5678, 0.0);
        let bob = Person::new("Bob", "Stone", 2);

        assert!(!bank.check_authorized_user(n, Some(&bob)));
        bank.add_authorized_user(n, Some(&bob));
        assert!(bank.check_authorized_user(n, Some(&bob)));
        assert!(!bank.try_add_authorized_user(n, &bob).unwrap());
        assert!(!bank.check_authorized_user(n, None));
    }

    #[test]
    fn test_authorized_users_rejected_on_consumer_account() {
        let mut bank = Bank::new();
        let n = bank.open_consumer_account(alice(), 1234, 0.0);
        let bob = Person::new("Bob", "Stone", 2);

        bank.add_authorized_user(n, Some(&bob));
        assert!(!bank.check_authorized_user(n, Some(&bob)));
        assert!(matches!(
            bank.try_add_authorized_user(n, &bob),
            Err(BankError::NotCommercial(_))
        ));
    }

    #[test]
    fn test_add_without_person_is_noop() {
        let mut bank = Bank::new();
        let n = bank.open_commercial_account(acme(), 5678, 0.0);
        bank.add_authorized_user(n, None);

        let users = bank.account(n).unwrap().authorized_users().unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_report_on_empty_bank() {
        let report = Bank::new().get_average_balance_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report["ConsumerAccount"], 0.0);
        assert_eq!(report["CommercialAccount"], 0.0);
    }

    #[test]
    fn test_typed_report() {
        let mut bank = Bank::new();
        bank.open_consumer_account(alice(), 1, 10.0);
        bank.open_consumer_account(alice(), 1, 30.0);

        let report = bank.average_balance_report();
        assert!((report.average(AccountCategory::Consumer) - 20.0).abs() < 1e-9);
        assert_eq!(report.average(AccountCategory::Commercial), 0.0);
    }
}
