//! Per-category average balance report.

use crate::account::{Account, AccountCategory};
use crate::error::Result;
use std::collections::HashMap;
use std::io::Write;

/// Streaming arithmetic mean.
///
/// Each sample folds in as `mean = (mean * (n - 1) + x) / n`, so no running
/// sum is kept. An empty mean is `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    mean: f64,
    count: u64,
}

impl RunningMean {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let n = self.count as f64;
        self.mean = (self.mean * (n - 1.0) + value) / n;
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Average balance per account category.
///
/// Always carries an entry for every [`AccountCategory`]; categories without
/// accounts report `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    consumer: RunningMean,
    commercial: RunningMean,
}

impl BalanceReport {
    /// Builds the report in a single pass over `accounts`.
    pub fn from_accounts<'a, I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = &'a Account>,
    {
        let mut report = BalanceReport {
            consumer: RunningMean::default(),
            commercial: RunningMean::default(),
        };

        for account in accounts {
            report.slot_mut(account.category()).push(account.balance());
        }

        report
    }

    fn slot(&self, category: AccountCategory) -> &RunningMean {
        match category {
            AccountCategory::Consumer => &self.consumer,
            AccountCategory::Commercial => &self.commercial,
        }
    }

    fn slot_mut(&mut self, category: AccountCategory) -> &mut RunningMean {
        match category {
            AccountCategory::Consumer => &mut self.consumer,
            AccountCategory::Commercial => &mut self.commercial,
        }
    }

    /// Average balance of `category`.
    pub fn average(&self, category: AccountCategory) -> f64 {
        self.slot(category).mean()
    }

    /// Number of accounts that went into the average of `category`.
    pub fn count(&self, category: AccountCategory) -> u64 {
        self.slot(category).count()
    }

    /// `(category, average)` pairs in [`AccountCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (AccountCategory, f64)> + '_ {
        AccountCategory::ALL
            .into_iter()
            .map(move |category| (category, self.average(category)))
    }

    /// The report keyed by legacy category labels.
    pub fn to_label_map(&self) -> HashMap<String, f64> {
        self.iter()
            .map(|(category, average)| (category.label().to_string(), average))
            .collect()
    }

    /// Writes the report as CSV with a `category,average_balance` header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["category", "average_balance"])?;
        for (category, average) in self.iter() {
            csv_writer.write_record([category.label().to_string(), format!("{:.2}", average)])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holder::{Company, Person};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_running_mean_matches_plain_average() {
        let values = [10.0, 20.5, -3.25, 1000.0, 0.1];
        let mut mean = RunningMean::default();
        for v in values {
            mean.push(v);
        }

        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean.mean() - expected).abs() < EPSILON);
        assert_eq!(mean.count(), 5);
    }

    #[test]
    fn test_empty_mean_is_zero() {
        assert_eq!(RunningMean::default().mean(), 0.0);
    }

    #[test]
    fn test_report_groups_by_category() {
        let accounts = vec![
            Account::consumer(1, Person::new("A", "B", 1), 1, 100.0),
            Account::commercial(2, Company::new("Acme", 2), 2, 500.0),
            Account::consumer(3, Person::new("C", "D", 3), 3, 200.0),
        ];

        let report = BalanceReport::from_accounts(&accounts);
        assert!((report.average(AccountCategory::Consumer) - 150.0).abs() < EPSILON);
        assert!((report.average(AccountCategory::Commercial) - 500.0).abs() < EPSILON);
        assert_eq!(report.count(AccountCategory::Consumer), 2);
        assert_eq!(report.count(AccountCategory::Commercial), 1);
    }

    #[test]
    fn test_label_map_always_has_both_categories() {
        let report = BalanceReport::from_accounts(std::iter::empty());
        let map = report.to_label_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["ConsumerAccount"], 0.0);
        assert_eq!(map["CommercialAccount"], 0.0);
    }

    #[test]
    fn test_write_csv() {
        let accounts = vec![Account::consumer(1, Person::new("A", "B", 1), 1, 12.5)];
        let report = BalanceReport::from_accounts(&accounts);

        let mut output = Vec::new();
        report.write_csv(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "category,average_balance\nConsumerAccount,12.50\nCommercialAccount,0.00\n"
        );
    }
}
