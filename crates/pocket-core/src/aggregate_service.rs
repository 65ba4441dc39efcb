//! Totals over a subset of transactions.

use pocket_domain::{LedgerTotals, Transaction};

pub struct AggregateService;

impl AggregateService {
    /// Sums income, expense and per-category spending.
    ///
    /// Positive amounts are income, negative amounts are expense (counted by
    /// absolute value). Zero amounts count toward neither. Only expenses feed
    /// `category_totals`.
    pub fn aggregate<'a, I>(transactions: I) -> LedgerTotals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = LedgerTotals::default();
        for txn in transactions {
            if txn.amount > 0.0 {
                totals.total_income += txn.amount;
            } else if txn.amount < 0.0 {
                let spent = txn.amount.abs();
                totals.total_expense += spent;
                totals.add_category_expense(&txn.category, spent);
            }
        }
        totals.balance = totals.total_income - totals.total_expense;
        totals
    }
}
