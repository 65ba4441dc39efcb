//! Month-based selection over the ledger.

use std::collections::BTreeSet;

use pocket_domain::{Ledger, MonthKey, Transaction};

pub struct FilterService;

impl FilterService {
    /// Returns the entries created in `month`, or every entry when `month` is
    /// `None`. Original relative order is preserved; the result borrows from
    /// the ledger and never copies entries.
    pub fn select_month<'a>(ledger: &'a Ledger, month: Option<&MonthKey>) -> Vec<&'a Transaction> {
        match month {
            None => ledger.iter().collect(),
            Some(month) => ledger
                .iter()
                .filter(|txn| txn.month_key() == *month)
                .collect(),
        }
    }

    /// Distinct months present in the ledger, oldest first.
    pub fn months(ledger: &Ledger) -> Vec<MonthKey> {
        ledger
            .iter()
            .map(Transaction::month_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
