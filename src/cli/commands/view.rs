use pocket_core::{CurrencyFormatter, FilterService, MASKED_AMOUNT};
use pocket_domain::MonthKey;

use crate::cli::charts::{render_bars, DEFAULT_BAR_WIDTH};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::Formatter;
use crate::cli::registry::CommandEntry;

const MONTH_USAGE: &str = "month [YYYY-MM|all]";
const SUMMARY_USAGE: &str = "summary [--json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "month",
            "Show or set the month filter",
            MONTH_USAGE,
            cmd_month,
        ),
        CommandEntry::new(
            "summary",
            "Show balance, income, expense and alerts",
            SUMMARY_USAGE,
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Chart expenses by category and income against expense",
            "chart",
            cmd_chart,
        ),
    ]
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let formatter = Formatter::new();
    match args {
        [] => {
            formatter.print_header("Month filter");
            let months: Vec<String> = FilterService::months(context.ledger.ledger())
                .iter()
                .map(MonthKey::to_string)
                .collect();
            let known = if months.is_empty() {
                "none".to_string()
            } else {
                months.join(", ")
            };
            let current = context.month_label();
            formatter.print_two_column(&[("Showing", current.as_str()), ("Known", known.as_str())]);
            Ok(())
        }
        [value] => {
            context.month = if value.eq_ignore_ascii_case("all") {
                None
            } else {
                MonthKey::parse_optional(value).map_err(|err| {
                    CommandError::InvalidArguments(format!("invalid month `{}`: {}", value, err))
                })?
            };
            formatter.print_success(format!("Showing {}.", context.month_label()));
            Ok(())
        }
        _ => Err(CommandError::usage(MONTH_USAGE)),
    }
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let dashboard = context.dashboard();
    match args {
        [] => {}
        [flag] if *flag == "--json" => {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
            return Ok(());
        }
        _ => return Err(CommandError::usage(SUMMARY_USAGE)),
    }

    let formatter = Formatter::new();
    formatter.print_header(format!("Summary ({})", context.month_label()));
    let display = &dashboard.display;
    formatter.print_two_column(&[
        ("Balance", display.balance.as_str()),
        ("Income", display.income.as_str()),
        ("Expense", display.expense.as_str()),
    ]);
    if dashboard.hide_balance {
        formatter.print_detail("Balance hidden. Use `balance` to show it.");
    }
    if dashboard.overspending {
        formatter.print_warning("You are spending more than you earn.");
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("chart"));
    }

    let dashboard = context.dashboard();
    let formatter = Formatter::new();
    let currency = &context.formatter;
    let show = |amount: f64| {
        if dashboard.hide_balance {
            MASKED_AMOUNT.to_string()
        } else {
            currency.format_amount(amount)
        }
    };

    formatter.print_header(format!("Expenses by category ({})", context.month_label()));
    if dashboard.category_chart.is_empty() {
        formatter.print_info("No expenses recorded.");
    } else {
        for line in render_bars(&dashboard.category_chart, DEFAULT_BAR_WIDTH, &show) {
            formatter.print_info(line);
        }
    }

    formatter.print_header("Income vs expense");
    for line in render_bars(&dashboard.flow_chart, DEFAULT_BAR_WIDTH, &show) {
        formatter.print_info(line);
    }
    Ok(())
}
