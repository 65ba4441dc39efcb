//! Owning store for the ledger: validation, id assignment and persistence.

use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, TimeZone, Utc};
use pocket_domain::{Ledger, LedgerTotals, MonthKey, Transaction};
use tracing::{debug, error, warn};

use crate::{
    aggregate_service::AggregateService,
    filter_service::FilterService,
    storage::{KeyValueStore, TRANSACTIONS_KEY},
    time::Clock,
    CoreError,
};

/// Raw input for a new entry, as supplied by a form layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub text: String,
    pub amount: f64,
    pub is_expense: bool,
    pub category: String,
}

impl NewTransaction {
    pub fn income(text: impl Into<String>, amount: f64) -> Self {
        Self {
            text: text.into(),
            amount,
            is_expense: false,
            category: String::new(),
        }
    }

    pub fn expense(text: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            amount,
            is_expense: true,
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.text.trim().is_empty() {
            return Err(CoreError::Validation("text must not be empty".into()));
        }
        if !self.amount.is_finite() {
            return Err(CoreError::Validation("amount must be a finite number".into()));
        }
        if self.amount == 0.0 {
            return Err(CoreError::Validation("amount must not be zero".into()));
        }
        Ok(())
    }

    /// Signed amount: expenses are always negative, income keeps its sign.
    pub fn signed_amount(&self) -> f64 {
        if self.is_expense {
            -self.amount.abs()
        } else {
            self.amount
        }
    }
}

/// Owns the in-memory ledger and writes the full snapshot after every change.
pub struct LedgerStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ledger: Ledger,
}

impl LedgerStore {
    /// Loads whatever ledger the store holds (empty when absent or unreadable).
    pub fn open(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let ledger = Self::load(store.as_ref());
        debug!(count = ledger.len(), "ledger opened");
        Self {
            store,
            clock,
            ledger,
        }
    }

    /// Reads the persisted ledger. Never fails: missing or corrupt data yields
    /// an empty ledger, and individual unreadable entries are skipped.
    pub fn load(store: &dyn KeyValueStore) -> Ledger {
        match store.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => decode_ledger(&raw),
            Ok(None) => Ledger::new(),
            Err(err) => {
                warn!(error = %err, "could not read stored ledger; starting empty");
                Ledger::new()
            }
        }
    }

    /// Overwrites the persisted ledger with `ledger`.
    pub fn save(store: &dyn KeyValueStore, ledger: &Ledger) -> Result<(), CoreError> {
        let json = serde_json::to_string(ledger)?;
        store.set(TRANSACTIONS_KEY, &json)
    }

    pub fn add(&mut self, input: NewTransaction) -> Result<Transaction, CoreError> {
        input.validate()?;
        let created = truncate_to_millis(self.clock.now());
        let id = self.ledger.next_id(created.timestamp_millis());
        let transaction = Transaction::new(
            id,
            input.text.trim(),
            input.signed_amount(),
            input.category.trim(),
            created,
        );

        let previous = self.ledger.clone();
        self.ledger.push(transaction.clone());
        self.persist(previous)?;
        debug!(id, kind = %transaction.kind(), "transaction added");
        Ok(transaction)
    }

    /// Removes the entry with `id`. Unknown ids are not an error; the ledger is
    /// persisted either way.
    pub fn remove(&mut self, id: i64) -> Result<Option<Transaction>, CoreError> {
        let previous = self.ledger.clone();
        let removed = self.ledger.remove(id);
        self.persist(previous)?;
        match &removed {
            Some(txn) => debug!(id, kind = %txn.kind(), "transaction removed"),
            None => debug!(id, "remove ignored; no such transaction"),
        }
        Ok(removed)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    pub fn select_month(&self, month: Option<&MonthKey>) -> Vec<&Transaction> {
        FilterService::select_month(&self.ledger, month)
    }

    pub fn totals(&self, month: Option<&MonthKey>) -> LedgerTotals {
        AggregateService::aggregate(self.select_month(month))
    }

    fn persist(&mut self, previous: Ledger) -> Result<(), CoreError> {
        if let Err(err) = Self::save(self.store.as_ref(), &self.ledger) {
            error!(error = %err, "failed to persist ledger; change reverted");
            self.ledger = previous;
            return Err(err);
        }
        Ok(())
    }
}

/// Decodes a stored snapshot. Anything other than a JSON array is treated as
/// an empty ledger; array entries that do not decode, or that repeat an id
/// already seen, are dropped.
pub fn decode_ledger(raw: &str) -> Ledger {
    let entries: Vec<serde_json::Value> = match serde_json::from_str::<Option<_>>(raw) {
        Ok(Some(entries)) => entries,
        Ok(None) => return Ledger::new(),
        Err(err) => {
            warn!(error = %err, "stored ledger is not readable; starting empty");
            return Ledger::new();
        }
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<Transaction>(entry) {
                Ok(txn) if seen.insert(txn.id) => Some(txn),
                Ok(txn) => {
                    warn!(index, id = txn.id, "skipping stored transaction with duplicate id");
                    None
                }
                Err(err) => {
                    warn!(index, error = %err, "skipping unreadable stored transaction");
                    None
                }
            },
        )
        .collect()
}

fn truncate_to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(at.timestamp_millis())
        .single()
        .unwrap_or(at)
}
