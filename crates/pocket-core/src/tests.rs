use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use crate::{
    aggregate_service::AggregateService,
    alert_service::AlertService,
    dashboard::DashboardService,
    filter_service::FilterService,
    format::{SymbolFormatter, MASKED_AMOUNT},
    ledger_store::{LedgerStore, NewTransaction},
    preference_service::PreferenceStore,
    storage::{KeyValueStore, MemoryStore, HIDE_BALANCE_KEY, THEME_KEY, TRANSACTIONS_KEY},
    time::FixedClock,
    CoreError,
};
use pocket_domain::{MonthKey, Theme, TransactionKind};

/// Store whose writes always fail, for exercising rollback.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("store is read-only".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("store is read-only".into()))
    }
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ))
}

fn open_store() -> (LedgerStore, Arc<MemoryStore>, Arc<FixedClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = clock();
    let ledger = LedgerStore::open(store.clone(), clock.clone());
    (ledger, store, clock)
}

#[test]
fn income_only_ledger_has_matching_balance() {
    let (mut ledger, _, _) = open_store();
    ledger
        .add(NewTransaction::income("Salary", 5000.0))
        .expect("add income");

    let totals = ledger.totals(None);
    assert_eq!(totals.total_income, 5000.0);
    assert_eq!(totals.total_expense, 0.0);
    assert_eq!(totals.balance, 5000.0);
    assert!(totals.category_totals.is_empty());
}

#[test]
fn expense_reduces_balance_and_feeds_category_totals() {
    let (mut ledger, _, clock) = open_store();
    ledger
        .add(NewTransaction::income("Salary", 5000.0))
        .expect("add income");
    clock.advance(Duration::minutes(1));
    let food = ledger
        .add(NewTransaction::expense("Food", 200.0, "Groceries"))
        .expect("add expense");

    assert_eq!(food.amount, -200.0);
    assert_eq!(food.kind(), TransactionKind::Expense);
    let totals = ledger.totals(None);
    assert_eq!(totals.balance, 4800.0);
    assert_eq!(totals.category_totals.len(), 1);
    assert_eq!(totals.category("Groceries"), Some(200.0));
}

#[test]
fn expense_flag_forces_negative_amount() {
    let (mut ledger, _, _) = open_store();
    let txn = ledger
        .add(NewTransaction::expense("Refund gone wrong", -35.0, "Misc"))
        .expect("add expense");
    assert_eq!(txn.amount, -35.0);
}

#[test]
fn invalid_input_is_rejected_and_not_persisted() {
    let (mut ledger, store, _) = open_store();
    let cases = [
        NewTransaction::income("   ", 10.0),
        NewTransaction::income("Gift", 0.0),
        NewTransaction::income("Gift", f64::NAN),
        NewTransaction::expense("Taxi", f64::INFINITY, "Transport"),
    ];
    for input in cases {
        let result = ledger.add(input);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
    assert!(ledger.is_empty());
    assert_eq!(store.get(TRANSACTIONS_KEY).unwrap(), None);
}

#[test]
fn ids_follow_clock_and_stay_unique_within_one_millisecond() {
    let (mut ledger, _, clock) = open_store();
    let first = ledger.add(NewTransaction::income("A", 1.0)).unwrap();
    let second = ledger.add(NewTransaction::income("B", 1.0)).unwrap();
    clock.advance(Duration::seconds(5));
    let third = ledger.add(NewTransaction::income("C", 1.0)).unwrap();

    assert_eq!(first.id, first.date.instant().unwrap().timestamp_millis());
    assert_eq!(second.id, first.id + 1);
    assert_eq!(third.id, third.date.instant().unwrap().timestamp_millis());
    assert!(third.id > second.id);
}

#[test]
fn creation_time_is_truncated_to_milliseconds() {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(
        Utc.timestamp_opt(1_709_283_600, 123_456_789).unwrap(),
    ));
    let mut ledger = LedgerStore::open(store.clone(), clock);
    let txn = ledger.add(NewTransaction::income("Tip", 3.0)).unwrap();
    assert_eq!(txn.date.instant().unwrap().timestamp_subsec_nanos(), 123_000_000);

    let reloaded = LedgerStore::load(&*store);
    assert_eq!(reloaded.get(txn.id), Some(&txn));
}

#[test]
fn remove_is_idempotent_and_persists() {
    let (mut ledger, store, clock) = open_store();
    let keep = ledger.add(NewTransaction::income("Keep", 10.0)).unwrap();
    clock.advance(Duration::seconds(1));
    let drop = ledger.add(NewTransaction::income("Drop", 20.0)).unwrap();

    let removed = ledger.remove(drop.id).expect("remove");
    assert_eq!(removed.map(|txn| txn.id), Some(drop.id));
    let after_first = ledger.ledger().clone();

    assert!(ledger.remove(drop.id).expect("remove again").is_none());
    assert_eq!(ledger.ledger(), &after_first);

    let persisted = LedgerStore::load(&*store);
    assert_eq!(persisted.len(), 1);
    assert!(persisted.contains(keep.id));
}

#[test]
fn failed_write_rolls_back_in_memory_change() {
    let seeded = MemoryStore::new();
    let mut writable = LedgerStore::open(Arc::new(MemoryStore::new()), clock());
    let existing = writable.add(NewTransaction::income("Seed", 1.0)).unwrap();
    LedgerStore::save(&seeded, writable.ledger()).unwrap();

    let mut ledger = LedgerStore::open(Arc::new(ReadOnlyStore(seeded)), clock());
    assert_eq!(ledger.len(), 1);

    let added = ledger.add(NewTransaction::income("Bonus", 50.0));
    assert!(matches!(added, Err(CoreError::Storage(_))));
    assert_eq!(ledger.len(), 1);

    let removed = ledger.remove(existing.id);
    assert!(removed.is_err());
    assert!(ledger.get(existing.id).is_some());
}

#[test]
fn corrupt_snapshot_loads_as_empty_ledger() {
    for raw in ["not json", "{\"id\":1}", "42", "null"] {
        let store = MemoryStore::with_entries([(TRANSACTIONS_KEY, raw)]);
        assert!(LedgerStore::load(&store).is_empty(), "input {raw:?}");
    }
}

#[test]
fn unreadable_entries_are_skipped_individually() {
    let raw = r#"[
        {"id":1,"text":"Salary","amount":5000,"category":"Food","date":"2024-03-01T09:00:00.000Z"},
        {"id":2,"text":"Broken","amount":null,"category":"Food","date":"2024-03-02T09:00:00.000Z"},
        {"id":3,"text":"Lunch","amount":-12.5,"category":"Food","date":"2024-03-03T09:00:00.000Z"},
        {"id":3,"text":"Dup","amount":-1,"category":"Food","date":"2024-03-03T09:00:00.000Z"}
    ]"#;
    let store = MemoryStore::with_entries([(TRANSACTIONS_KEY, raw)]);
    let ledger = LedgerStore::load(&store);
    let ids: Vec<_> = ledger.iter().map(|txn| txn.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(ledger.get(3).map(|txn| txn.text.as_str()), Some("Lunch"));
}

#[test]
fn other_iso_date_forms_load_and_survive_later_writes() {
    let raw = r#"[
        {"id":1,"text":"Rent","amount":-900,"category":"Housing","date":"2024-03-05"},
        {"id":2,"text":"Late","amount":-40,"category":"Food","date":"2024-03-31T23:30:00-05:00"}
    ]"#;
    let store = Arc::new(MemoryStore::with_entries([(TRANSACTIONS_KEY, raw)]));
    let mut ledger = LedgerStore::open(store.clone(), clock());
    assert_eq!(ledger.len(), 2);

    let march = MonthKey::parse("2024-03").unwrap();
    let ids: Vec<_> = ledger.select_month(Some(&march)).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);

    ledger.add(NewTransaction::income("Salary", 5000.0)).unwrap();
    let stored: serde_json::Value =
        serde_json::from_str(&store.get(TRANSACTIONS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored[0]["date"], "2024-03-05");
    assert_eq!(stored[1]["date"], "2024-03-31T23:30:00-05:00");
    assert_eq!(stored[2]["date"], "2024-03-01T09:00:00.000Z");
    assert_eq!(LedgerStore::load(&*store).len(), 3);
}

#[test]
fn overspending_requires_some_income() {
    assert!(!AlertService::is_overspending(0.0, 100.0));
    assert!(AlertService::is_overspending(100.0, 150.0));
    assert!(!AlertService::is_overspending(150.0, 150.0));
    assert!(!AlertService::is_overspending(200.0, 150.0));
}

#[test]
fn month_filter_keeps_original_order() {
    let (mut ledger, _, clock) = open_store();
    let march = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();
    let april = Utc.with_ymd_and_hms(2024, 4, 2, 8, 0, 0).unwrap();

    clock.set(march);
    let a = ledger.add(NewTransaction::income("A", 1.0)).unwrap();
    clock.set(april);
    let b = ledger.add(NewTransaction::income("B", 1.0)).unwrap();
    clock.set(march + Duration::days(10));
    let c = ledger.add(NewTransaction::income("C", 1.0)).unwrap();

    let key = MonthKey::parse("2024-03").unwrap();
    let ids: Vec<_> = ledger.select_month(Some(&key)).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);

    let all: Vec<_> = ledger.select_month(None).iter().map(|t| t.id).collect();
    assert_eq!(all, vec![a.id, b.id, c.id]);

    let months: Vec<_> = FilterService::months(ledger.ledger())
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(months, vec!["2024-03", "2024-04"]);
}

#[test]
fn zero_amounts_count_toward_neither_side() {
    let raw = r#"[{"id":1,"text":"Odd","amount":0,"category":"X","date":"2024-03-01T09:00:00.000Z"}]"#;
    let store = MemoryStore::with_entries([(TRANSACTIONS_KEY, raw)]);
    let ledger = LedgerStore::load(&store);
    let totals = AggregateService::aggregate(&ledger);
    assert_eq!(totals.total_income, 0.0);
    assert_eq!(totals.total_expense, 0.0);
    assert!(totals.category_totals.is_empty());
}

#[test]
fn preferences_default_to_visible_light() {
    let prefs = PreferenceStore::new(Arc::new(MemoryStore::new()));
    assert!(!prefs.hide_balance());
    assert_eq!(prefs.theme(), Theme::Light);
}

#[test]
fn preferences_toggle_and_persist_as_strings() {
    let store = Arc::new(MemoryStore::new());
    let prefs = PreferenceStore::new(store.clone());

    assert!(prefs.toggle_hide_balance().unwrap());
    assert_eq!(store.get(HIDE_BALANCE_KEY).unwrap().as_deref(), Some("true"));
    assert!(!prefs.toggle_hide_balance().unwrap());
    assert_eq!(store.get(HIDE_BALANCE_KEY).unwrap().as_deref(), Some("false"));

    assert_eq!(prefs.toggle_theme().unwrap(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    let reopened = PreferenceStore::new(store);
    assert_eq!(reopened.theme(), Theme::Dark);
    assert!(!reopened.preferences().hide_balance);
}

#[test]
fn dashboard_masks_amounts_when_hidden() {
    let (mut ledger, _, _) = open_store();
    ledger.add(NewTransaction::income("Salary", 100.0)).unwrap();
    ledger
        .add(NewTransaction::expense("Rent", 150.0, "Housing"))
        .unwrap();
    let formatter = SymbolFormatter::default();

    let visible = DashboardService::build(ledger.ledger(), None, false, &formatter);
    assert_eq!(visible.display.balance, "₦-50.00");
    assert_eq!(visible.display.income, "₦100.00");
    assert!(visible.overspending);
    assert_eq!(visible.rows.len(), 2);
    assert_eq!(visible.rows[1].category.as_deref(), Some("Housing"));
    assert_eq!(visible.rows[1].magnitude, 150.0);
    assert_eq!(visible.category_chart.labels, vec!["Housing".to_string()]);
    assert_eq!(visible.flow_chart.values, vec![100.0, 150.0]);

    let hidden = DashboardService::build(ledger.ledger(), None, true, &formatter);
    assert_eq!(hidden.display.balance, MASKED_AMOUNT);
    assert_eq!(hidden.display.expense, MASKED_AMOUNT);
    assert_eq!(hidden.totals, visible.totals);
}
