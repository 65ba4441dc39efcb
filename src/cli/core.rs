//! Dispatch, error reporting and shared helpers on top of [`ShellContext`].

use std::io;

use dialoguer::Confirm;
use pocket_config::ConfigError;
use pocket_core::{CoreError, Dashboard, DashboardService};
use strsim::levenshtein;
use tracing::debug;

pub use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::{AppError, CliError};

use super::output::Formatter;
use super::registry::CommandEntry;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] AppError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(entry_usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {}", entry_usage))
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => CommandError::InvalidArguments(message),
            other => CommandError::Core(AppError::from(other)),
        }
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue(message) => CommandError::InvalidArguments(message),
            other => CommandError::Core(AppError::from(other)),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        let formatter = Formatter::new();
        formatter.print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                formatter.print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .map_err(|err| CliError::from(CommandError::from(err)))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        let formatter = Formatter::new();
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                formatter.print_error(message);
                formatter.print_detail("Use `help <command>` for usage details.");
            }
            other => formatter.print_error(other),
        }
        Ok(())
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.month {
            Some(month) => format!("pocket [{}]> ", month),
            None => "pocket> ".to_string(),
        }
    }

    /// Dashboard for the active month filter and balance visibility.
    pub(crate) fn dashboard(&self) -> Dashboard {
        DashboardService::build(
            self.ledger.ledger(),
            self.month.as_ref(),
            self.preferences.hide_balance(),
            &self.formatter,
        )
    }

    pub(crate) fn month_label(&self) -> String {
        match &self.month {
            Some(month) => month.to_string(),
            None => "all months".to_string(),
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        Formatter::new().print_warning(message);
    }
}
