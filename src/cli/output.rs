//! Styled terminal output shared by every command.

use std::{fmt, sync::RwLock};

use colored::{Color, Colorize};
use once_cell::sync::Lazy;
use pocket_domain::{Theme, TransactionKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub theme: Theme,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            theme: Theme::default(),
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
    if prefs.color_enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

pub fn set_theme(theme: Theme) {
    let prefs = OutputPreferences {
        theme,
        ..current_preferences()
    };
    set_preferences(prefs);
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Success,
    Warning,
    Error,
}

pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    pub fn with_preferences(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.colorize(format!("=== {} ===", title), Style::Header)
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{}", message);
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("  {}", message);
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.decorate("✔", "OK:", message, Style::Success));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.decorate("⚠", "WARNING:", message, Style::Warning));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        println!("{}", self.decorate("✖", "ERROR:", message, Style::Error));
    }

    /// Green for income, red for expenses.
    pub fn amount_text(&self, kind: TransactionKind, text: &str) -> String {
        if !self.prefs.color_enabled {
            return text.to_string();
        }
        match kind {
            TransactionKind::Income => text.green().to_string(),
            TransactionKind::Expense => text.red().to_string(),
        }
    }

    pub fn print_two_column(&self, entries: &[(&str, &str)]) {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in entries {
            println!("{}", self.format_two_column_row(label, value, label_width));
        }
    }

    pub fn format_two_column_row(&self, label: &str, value: &str, width: usize) -> String {
        format!("  {:<width$}  {}", label, value, width = width + 2)
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        style: Style,
    ) -> String {
        if self.prefs.color_enabled {
            self.colorize(format!("{icon} {message}"), style)
        } else {
            format!("{plain_label} {message}")
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if !self.prefs.color_enabled {
            return text;
        }
        match style {
            Style::Header => text.bold().color(self.accent()).to_string(),
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
        }
    }

    fn accent(&self) -> Color {
        match self.prefs.theme {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::BrightCyan,
        }
    }
}
