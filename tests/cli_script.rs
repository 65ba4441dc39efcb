mod common;

use std::fs;

use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::{run_script, temp_home};

#[test]
fn script_mode_adds_lists_and_summarizes() {
    let home = temp_home();
    let script = "\
add income 5000 Salary
add expense 200 \"Weekly shop\" Groceries
list
summary
exit
";

    run_script(&home, script)
        .success()
        .stdout(
            contains("Added income")
                .and(contains("Added expense"))
                .and(contains("Weekly shop"))
                .and(contains("Groceries"))
                .and(contains("₦4800.00"))
                .and(contains("₦5000.00"))
                .and(contains("₦200.00")),
        );

    let stored = fs::read_to_string(home.join("store").join("transactions.value"))
        .expect("ledger persisted");
    let parsed: serde_json::Value = serde_json::from_str(&stored).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert_eq!(parsed[1]["amount"], -200.0);
    assert_eq!(parsed[1]["category"], "Groceries");
}

#[test]
fn ledger_survives_between_runs() {
    let home = temp_home();
    run_script(&home, "add income 750 Refund\nexit\n").success();

    run_script(&home, "list\nsummary\n")
        .success()
        .stdout(contains("Refund").and(contains("₦750.00")));
}

#[test]
fn hidden_balance_is_masked_and_remembered() {
    let home = temp_home();
    run_script(&home, "add income 100 Gift\nbalance\n")
        .success()
        .stdout(contains("Balance hidden."));

    run_script(&home, "summary\n")
        .success()
        .stdout(contains("****").and(contains("₦100.00").not()));
}

#[test]
fn overspending_is_flagged_only_with_income() {
    let home = temp_home();
    run_script(&home, "add expense 50 Snacks Food\nsummary\n")
        .success()
        .stdout(contains("spending more than you earn").not());

    run_script(&home, "add income 20 Tip\nsummary\n")
        .success()
        .stdout(contains("spending more than you earn"));
}

#[test]
fn invalid_input_is_reported_and_nothing_is_stored() {
    let home = temp_home();
    run_script(
        &home,
        "add expense 0 Nothing\nadd income abc Salary\nadd sideways 5 Thing\nlist\n",
    )
    .success()
    .stdout(
        contains("invalid amount `abc`")
            .and(contains("unknown transaction type `sideways`"))
            .and(contains("No transactions recorded.")),
    );
}

#[test]
fn removing_unknown_ids_is_not_an_error() {
    let home = temp_home();
    run_script(&home, "remove 42\nremove nope\n")
        .success()
        .stdout(contains("No transaction with id 42.").and(contains("invalid transaction id")));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = temp_home();
    run_script(&home, "sumary\nexit\n")
        .success()
        .stdout(contains("Unknown command `sumary`").and(contains("Suggestion: `summary`?")));
}

#[test]
fn month_filter_limits_the_listing() {
    let home = temp_home();
    run_script(&home, "add income 10 Coffee\nmonth 1999-01\nlist\nmonth\nmonth 2024-13\n")
        .success()
        .stdout(
            contains("Showing 1999-01.")
                .and(contains("No transactions recorded."))
                .and(contains("invalid month `2024-13`")),
        );
}

#[test]
fn summary_json_exposes_the_dashboard() {
    let home = temp_home();
    let output = run_script(&home, "add income 300 Salary\nsummary --json\n")
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf8");
    let start = text.find('{').expect("json object");
    let dashboard: serde_json::Value = serde_json::from_str(&text[start..]).expect("json");
    assert_eq!(dashboard["totals"]["total_income"], 300.0);
    assert_eq!(dashboard["overspending"], false);
    assert_eq!(dashboard["display"]["balance"], "₦300.00");
}

#[test]
fn help_and_version_describe_the_shell() {
    let home = temp_home();
    run_script(&home, "help\nhelp add\nversion\n")
        .success()
        .stdout(
            contains("Available commands")
                .and(contains("add <income|expense> <amount> <text> [category]"))
                .and(contains("Pocket Ledger")),
        );
}

#[test]
fn config_changes_apply_immediately_and_persist() {
    let home = temp_home();
    run_script(
        &home,
        "config set currency $\nconfig set precision 0\nadd expense 12.6 Lunch Food\nsummary\nconfig set precision 12\n",
    )
    .success()
    .stdout(
        contains("Set currency to $.")
            .and(contains("$-13"))
            .and(contains("precision must be a whole number")),
    );

    let stored = fs::read_to_string(home.join("config").join("config.json")).expect("config saved");
    let parsed: serde_json::Value = serde_json::from_str(&stored).expect("valid json");
    assert_eq!(parsed["currency_symbol"], "$");
    assert_eq!(parsed["currency_precision"], 0);

    run_script(&home, "config\n")
        .success()
        .stdout(contains("currency").and(contains("$")));
}

#[test]
fn entries_with_other_iso_dates_are_kept_and_filed_by_prefix() {
    let home = temp_home();
    let store = home.join("store");
    fs::create_dir_all(&store).expect("store dir");
    fs::write(
        store.join("transactions.value"),
        r#"[{"id":1,"text":"Rent","amount":-900,"category":"Housing","date":"2024-03-05"},
            {"id":2,"text":"Late snack","amount":-4,"category":"Food","date":"2024-03-31T23:30:00-05:00"}]"#,
    )
    .expect("seed ledger");

    run_script(&home, "month 2024-03\nlist\nadd income 50 Refund\n")
        .success()
        .stdout(contains("Rent").and(contains("Late snack")).and(contains("2024-03-31")));

    let stored = fs::read_to_string(store.join("transactions.value")).expect("ledger persisted");
    let parsed: serde_json::Value = serde_json::from_str(&stored).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));
    assert_eq!(parsed[0]["date"], "2024-03-05");
    assert_eq!(parsed[1]["date"], "2024-03-31T23:30:00-05:00");
}
