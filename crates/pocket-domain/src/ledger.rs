//! The ordered collection of recorded transactions.

use serde::{Deserialize, Serialize};

use crate::{common::Identifiable, transaction::Transaction};

/// Insertion-ordered list of transactions. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Removes the entry with `id`, keeping the relative order of the rest.
    pub fn remove(&mut self, id: i64) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id() == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn max_id(&self) -> Option<i64> {
        self.transactions.iter().map(|txn| txn.id()).max()
    }

    /// Returns `candidate` unless an existing id is already at or past it,
    /// in which case the next integer after the largest id is used.
    pub fn next_id(&self, candidate: i64) -> i64 {
        match self.max_id() {
            Some(max) if max >= candidate => max.saturating_add(1),
            _ => candidate,
        }
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}
