//! Shared runtime state for CLI interactions and command execution.

use std::{path::Path, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use pocket_config::{Config, ConfigManager};
use pocket_core::{
    Clock, KeyValueStore, LedgerStore, PreferenceStore, SymbolFormatter, SystemClock,
};
use pocket_domain::MonthKey;
use pocket_storage_json::JsonFileStore;
use tracing::debug;

use crate::errors::CliError;

use super::core::CommandError;
use crate::utils::paths;

use super::{
    commands,
    output::{self, OutputPreferences},
    registry::CommandRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: LedgerStore,
    pub preferences: PreferenceStore,
    pub formatter: SymbolFormatter,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Month filter applied by `list`, `summary` and `chart`; `None` means all.
    pub month: Option<MonthKey>,
    pub theme: ColorfulTheme,
}

impl ShellContext {
    /// Opens the data directory named by `POCKET_LEDGER_HOME` (or the default).
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, &paths::app_data_dir(), Arc::new(SystemClock))
    }

    pub fn with_home(mode: CliMode, home: &Path, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(home)?;
        let config = config_manager.load()?;
        let data_dir = config.resolve_data_dir(home);

        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&data_dir)?);
        let ledger = LedgerStore::open(store.clone(), clock);
        let preferences = PreferenceStore::new(store);
        let formatter = SymbolFormatter::new(
            config.currency_symbol.clone(),
            usize::from(config.currency_precision),
        );

        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
            theme: preferences.theme(),
        });
        debug!(
            data_dir = %data_dir.display(),
            transactions = ledger.len(),
            "shell ready"
        );

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            ledger,
            preferences,
            formatter,
            config_manager,
            config,
            month: None,
            theme: ColorfulTheme::default(),
        })
    }

    /// Persists `config` and applies its currency and colour settings.
    pub(crate) fn apply_config(&mut self, config: Config) -> Result<(), CommandError> {
        self.config_manager.save(&config)?;
        self.formatter = SymbolFormatter::new(
            config.currency_symbol.clone(),
            usize::from(config.currency_precision),
        );
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
            theme: self.preferences.theme(),
        });
        debug!(path = %self.config_manager.config_path().display(), "config saved");
        self.config = config;
        Ok(())
    }
}
