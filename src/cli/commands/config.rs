use pocket_config::{Config, SETTABLE_KEYS};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::Formatter;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str = "config [show|set <currency|precision|color> <value>|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change currency and colour settings",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action] if action.eq_ignore_ascii_case("reset") => {
            let data_dir = context.config.data_dir.clone();
            context.apply_config(Config {
                data_dir,
                ..Config::default()
            })?;
            Formatter::new().print_success("Settings restored to defaults.");
            Ok(())
        }
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            let value = value.join(" ");
            let mut config = context.config.clone();
            config.set_value(key, &value)?;
            context.apply_config(config)?;
            Formatter::new().print_success(format!("Set {} to {}.", key, value.trim()));
            Ok(())
        }
        [action, ..] if action.eq_ignore_ascii_case("set") => Err(CommandError::InvalidArguments(
            format!("usage: config set <{}> <value>", SETTABLE_KEYS.join("|")),
        )),
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let formatter = Formatter::new();
    formatter.print_header("Settings");
    let config = &context.config;
    let precision = config.currency_precision.to_string();
    let color = if config.ui_color_enabled { "on" } else { "off" };
    let data_dir = match &config.data_dir {
        Some(path) => path.display().to_string(),
        None => "default".to_string(),
    };
    let path = context.config_manager.config_path().display().to_string();
    formatter.print_two_column(&[
        ("currency", config.currency_symbol.as_str()),
        ("precision", precision.as_str()),
        ("color", color),
        ("data dir", data_dir.as_str()),
        ("file", path.as_str()),
    ]);
    Ok(())
}
