pub mod config;
pub mod preferences;
pub mod system;
pub mod transaction;
pub mod view;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add", "remove", "list", "month", "summary", "chart", "balance", "theme", "config", "help",
    "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(transaction::definitions());
    commands.extend(view::definitions());
    commands.extend(preferences::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

/// Parses a user-typed amount; range checks happen in the ledger store.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim().parse::<f64>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid amount `{}` (use a number such as 1250.50)",
            raw
        ))
    })
}
