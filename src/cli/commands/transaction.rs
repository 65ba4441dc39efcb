use dialoguer::Select;
use pocket_core::{AlertService, CurrencyFormatter, EntryRow, NewTransaction};
use pocket_domain::TransactionKind;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output::Formatter;
use crate::cli::registry::CommandEntry;

use super::parse_amount;

const ADD_USAGE: &str = "add <income|expense> <amount> <text> [category]";
const REMOVE_USAGE: &str = "remove <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or an expense", ADD_USAGE, cmd_add),
        CommandEntry::new("remove", "Delete a transaction by id", REMOVE_USAGE, cmd_remove),
        CommandEntry::new(
            "list",
            "List transactions for the selected month",
            "list",
            cmd_list,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (kind, amount, text, category) = match args {
        [kind, amount, text] => (*kind, *amount, *text, None),
        [kind, amount, text, category] => (*kind, *amount, *text, Some(*category)),
        _ => return Err(CommandError::usage(ADD_USAGE)),
    };
    let kind = TransactionKind::from_label(kind).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown transaction type `{}` (use income or expense)",
            kind
        ))
    })?;
    let amount = parse_amount(amount)?;

    let formatter = Formatter::new();
    let input = match kind {
        TransactionKind::Income => {
            if category.is_some() {
                formatter.print_warning("Categories apply to expenses only; ignoring it.");
            }
            NewTransaction::income(text, amount)
        }
        TransactionKind::Expense => NewTransaction::expense(text, amount, category.unwrap_or("")),
    };

    let txn = context.ledger.add(input)?;
    formatter.print_success(format!(
        "Added {} #{}: {} {}",
        txn.kind(),
        txn.id,
        txn.text,
        context.formatter.format_amount(txn.magnitude())
    ));
    warn_if_overspending(context, &formatter);
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = match args {
        [raw] => raw.trim().parse::<i64>().map_err(|_| {
            CommandError::InvalidArguments(format!("invalid transaction id `{}`", raw))
        })?,
        [] if context.mode == CliMode::Interactive => match select_transaction(context)? {
            Some(id) => id,
            None => return Ok(()),
        },
        _ => return Err(CommandError::usage(REMOVE_USAGE)),
    };

    let formatter = Formatter::new();
    match context.ledger.remove(id)? {
        Some(txn) => formatter.print_success(format!("Removed #{}: {}", txn.id, txn.text)),
        None => formatter.print_warning(format!("No transaction with id {}.", id)),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("list"));
    }

    let dashboard = context.dashboard();
    let formatter = Formatter::new();
    formatter.print_header(format!("Transactions ({})", context.month_label()));
    if dashboard.rows.is_empty() {
        formatter.print_info("No transactions recorded.");
        return Ok(());
    }
    for row in &dashboard.rows {
        formatter.print_info(format_row(row, &context.formatter, &formatter));
    }
    Ok(())
}

fn format_row(
    row: &EntryRow,
    currency: &dyn CurrencyFormatter,
    formatter: &Formatter,
) -> String {
    let sign = match row.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    let amount = format!("{}{}", sign, currency.format_amount(row.magnitude));
    format!(
        "  #{:<14} {}  {:<24} {:<14} {}",
        row.id,
        row.date.day().format("%Y-%m-%d"),
        row.text,
        row.category.as_deref().unwrap_or("-"),
        formatter.amount_text(row.kind, &amount)
    )
}

fn select_transaction(context: &ShellContext) -> Result<Option<i64>, CommandError> {
    let rows = context.dashboard().rows;
    if rows.is_empty() {
        Formatter::new().print_info("No transactions to remove.");
        return Ok(None);
    }
    let labels: Vec<String> = rows
        .iter()
        .map(|row| format!("#{} {} {}", row.id, row.text, row.magnitude))
        .collect();
    let choice = Select::with_theme(&context.theme)
        .with_prompt("Select a transaction to remove")
        .items(&labels)
        .interact_opt()?;
    Ok(choice.map(|index| rows[index].id))
}

pub(crate) fn warn_if_overspending(context: &ShellContext, formatter: &Formatter) {
    let totals = context.ledger.totals(context.month.as_ref());
    if AlertService::evaluate(&totals) {
        formatter.print_warning(format!(
            "Overspending: expenses exceed income for {}.",
            context.month_label()
        ));
    }
}
