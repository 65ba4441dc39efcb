use pocket_domain::Theme;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, Formatter};
use crate::cli::registry::CommandEntry;

const THEME_USAGE: &str = "theme [dark|light]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "balance",
            "Toggle hiding of balance, income and expense",
            "balance",
            cmd_balance,
        ),
        CommandEntry::new(
            "theme",
            "Switch between the light and dark theme",
            THEME_USAGE,
            cmd_theme,
        ),
    ]
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("balance"));
    }
    let hidden = context.preferences.toggle_hide_balance()?;
    let message = if hidden {
        "Balance hidden."
    } else {
        "Balance shown."
    };
    Formatter::new().print_success(message);
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let theme = match args {
        [] => context.preferences.toggle_theme()?,
        [label] => {
            let theme = Theme::from_label(label).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "unknown theme `{}` (use dark or light)",
                    label
                ))
            })?;
            context.preferences.set_theme(theme)?;
            theme
        }
        _ => return Err(CommandError::usage(THEME_USAGE)),
    };
    output::set_theme(theme);
    Formatter::new().print_success(format!("Theme set to {}.", theme));
    Ok(())
}
