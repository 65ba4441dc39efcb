use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

const DEFAULT_HOME_DIR: &str = ".pocket_ledger";
const STORE_DIR: &str = "store";
const MAX_PRECISION: u8 = 6;

/// Keys accepted by [`Config::set_value`].
pub const SETTABLE_KEYS: &[&str] = &["currency", "precision", "color"];

/// User-configurable settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for the key-value store. Defaults to `<home>/store`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            currency_precision: Self::default_currency_precision(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₦".into()
    }

    pub fn default_currency_precision() -> u8 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// `~/.pocket_ledger`, or `./.pocket_ledger` when no home directory is known.
    pub fn default_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_HOME_DIR)
    }

    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => home.join(STORE_DIR),
        }
    }

    /// Updates one user-facing setting from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "currency" | "currency_symbol" => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue(
                        "currency symbol must not be empty".into(),
                    ));
                }
                self.currency_symbol = value.to_string();
            }
            "precision" | "currency_precision" => {
                self.currency_precision = value
                    .parse::<u8>()
                    .ok()
                    .filter(|digits| *digits <= MAX_PRECISION)
                    .ok_or_else(|| {
                        ConfigError::InvalidValue(format!(
                            "precision must be a whole number from 0 to {}",
                            MAX_PRECISION
                        ))
                    })?;
            }
            "color" | "ui_color_enabled" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => {
                        return Err(ConfigError::InvalidValue(format!(
                            "color must be on or off, not `{}`",
                            value
                        )))
                    }
                };
            }
            other => {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown setting `{}` (use {})",
                    other,
                    SETTABLE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
