use crate::cli::output::Formatter;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    let formatter = Formatter::new();
    formatter.print_header("Available commands");
    let rows: Vec<(&str, &str)> = registry
        .list()
        .into_iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    formatter.print_two_column(&rows);
    formatter.print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    let formatter = Formatter::new();
    formatter.print_header(format!("Help: {}", entry.name));
    formatter.print_two_column(&[("description", entry.description), ("usage", entry.usage)]);
}
