//! Aggregated totals derived from a subset of the ledger.

use serde::{Deserialize, Serialize};

/// Summed expense for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: f64,
}

/// Balance, income, expense and per-category spending for a set of entries.
/// Values are kept at full precision; rounding belongs to whoever renders them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerTotals {
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
    /// Ordered by first occurrence. Categories without expenses are absent.
    pub category_totals: Vec<CategoryTotal>,
}

impl LedgerTotals {
    pub fn category(&self, name: &str) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.amount)
    }

    /// Adds `amount` to the named category, creating it at the end if new.
    pub fn add_category_expense(&mut self, name: &str, amount: f64) {
        match self
            .category_totals
            .iter_mut()
            .find(|entry| entry.name == name)
        {
            Some(entry) => entry.amount += amount,
            None => self.category_totals.push(CategoryTotal {
                name: name.to_string(),
                amount,
            }),
        }
    }
}
