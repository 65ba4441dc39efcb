//! Domain model for a single income or expense entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{common::*, date::EntryDate, month::MonthKey};

/// A recorded ledger entry. The sign of `amount` is the only thing that
/// distinguishes income (positive) from expense (negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub text: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    pub date: EntryDate,
}

impl Transaction {
    pub fn new(
        id: i64,
        text: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<EntryDate>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_amount(self.amount)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind(), TransactionKind::Expense)
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind(), TransactionKind::Income)
    }

    /// Unsigned amount, as shown next to the entry.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// `YYYY-MM` prefix of the stored date.
    pub fn month_key(&self) -> MonthKey {
        self.date.month_key().clone()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let sign = match self.kind() {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        if self.is_expense() && !self.category.is_empty() {
            format!("{} ({}) {}{}", self.text, self.category, sign, self.magnitude())
        } else {
            format!("{} {}{}", self.text, sign, self.magnitude())
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Income/expense classification derived from the amount sign.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" | "+" => Some(TransactionKind::Income),
            "expense" | "out" | "-" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
