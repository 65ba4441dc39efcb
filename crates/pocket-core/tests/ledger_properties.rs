use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use pocket_core::{
    AggregateService, FilterService, FixedClock, LedgerStore, MemoryStore, NewTransaction,
};
use pocket_domain::{Ledger, Transaction};

/// Builds a ledger spread over three months with mixed income and expenses.
fn seeded_store() -> (LedgerStore, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap(),
    ));
    let mut ledger = LedgerStore::open(store.clone(), clock.clone());

    let inputs = [
        NewTransaction::income("Salary", 5000.0),
        NewTransaction::expense("Food", 200.0, "Groceries"),
        NewTransaction::expense("Bus", 12.75, "Transport"),
        NewTransaction::income("Freelance", 640.5),
        NewTransaction::expense("Dinner", 85.0, "Groceries"),
        NewTransaction::expense("Cinema", 30.0, "Leisure"),
        NewTransaction::income("Salary", 5000.0),
        NewTransaction::expense("Rent", 1800.0, "Housing"),
    ];
    for (index, input) in inputs.into_iter().enumerate() {
        ledger.add(input).expect("seed transaction");
        clock.advance(Duration::days(13 + index as i64));
    }
    (ledger, store)
}

#[test]
fn month_selections_partition_the_ledger() {
    let (ledger, _) = seeded_store();
    let months = FilterService::months(ledger.ledger());
    assert!(months.len() >= 3, "seed should span several months");

    let mut seen = Vec::new();
    let mut income = 0.0;
    let mut expense = 0.0;
    for month in &months {
        let selected = FilterService::select_month(ledger.ledger(), Some(month));
        assert!(selected.iter().all(|txn| txn.month_key() == *month));
        seen.extend(selected.iter().map(|txn| txn.id));
        let totals = AggregateService::aggregate(selected);
        income += totals.total_income;
        expense += totals.total_expense;
    }

    seen.sort_unstable();
    let mut all: Vec<_> = ledger.ledger().iter().map(|txn| txn.id).collect();
    all.sort_unstable();
    assert_eq!(seen, all, "every entry belongs to exactly one month");

    let overall = ledger.totals(None);
    assert!((overall.total_income - income).abs() < 1e-9);
    assert!((overall.total_expense - expense).abs() < 1e-9);
    assert!((overall.balance - (income - expense)).abs() < 1e-9);
}

#[test]
fn removing_disjoint_ids_preserves_order_of_the_rest() {
    let (mut ledger, _) = seeded_store();
    let before: Vec<_> = ledger.ledger().iter().map(|txn| txn.id).collect();
    let doomed = [before[1], before[4], before[6]];

    for id in doomed {
        ledger.remove(id).expect("remove");
    }

    let expected: Vec<_> = before
        .iter()
        .copied()
        .filter(|id| !doomed.contains(id))
        .collect();
    let after: Vec<_> = ledger.ledger().iter().map(|txn| txn.id).collect();
    assert_eq!(after, expected);
}

#[test]
fn save_then_load_round_trips() {
    let (ledger, store) = seeded_store();
    let snapshot = ledger.ledger().clone();

    let other = MemoryStore::new();
    LedgerStore::save(&other, &snapshot).expect("save");
    assert_eq!(LedgerStore::load(&other), snapshot);

    // The store the ledger wrote through sees the same snapshot.
    assert_eq!(LedgerStore::load(&*store), snapshot);
}

/// xorshift64, so the amounts are arbitrary but the run is repeatable.
fn next_bits(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[test]
fn arbitrary_finite_amounts_round_trip_exactly() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut state = 0x9E37_79B9_7F4A_7C15;
    let mut ledger = Ledger::new();
    let mut id = 0;
    while ledger.len() < 5_000 {
        let bits = next_bits(&mut state);
        // Alternate raw bit patterns (any finite double) with cent-scale values.
        let amount = if id % 2 == 0 {
            f64::from_bits(bits)
        } else {
            (bits % 10_000_000_000) as f64 / 100.0 * if bits & 1 == 0 { 1.0 } else { -1.0 }
        };
        if !amount.is_finite() || amount == 0.0 {
            continue;
        }
        id += 1;
        let date = start + Duration::minutes(id);
        ledger.push(Transaction::new(id, format!("entry {id}"), amount, "Misc", date));
    }

    let store = MemoryStore::new();
    LedgerStore::save(&store, &ledger).expect("save");
    let reloaded = LedgerStore::load(&store);
    assert_eq!(reloaded.len(), ledger.len());
    for (before, after) in ledger.iter().zip(reloaded.iter()) {
        assert_eq!(
            before.amount.to_bits(),
            after.amount.to_bits(),
            "amount {} changed on reload",
            before.amount
        );
    }
    assert_eq!(reloaded, ledger);
}

#[test]
fn empty_ledger_round_trips() {
    let store = MemoryStore::new();
    LedgerStore::save(&store, &Ledger::new()).expect("save");
    assert!(LedgerStore::load(&store).is_empty());
}

#[test]
fn category_totals_only_come_from_expenses() {
    let (ledger, _) = seeded_store();
    let totals = ledger.totals(None);
    let names: Vec<_> = totals
        .category_totals
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Groceries", "Transport", "Leisure", "Housing"]);
    assert_eq!(totals.category("Groceries"), Some(285.0));
    assert!(totals.category_totals.iter().all(|entry| entry.amount > 0.0));
}
