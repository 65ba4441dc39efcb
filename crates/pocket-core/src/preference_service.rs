//! Balance visibility and theme preferences kept in the key-value store.

use std::sync::Arc;

use pocket_domain::{Preferences, Theme};
use tracing::{debug, warn};

use crate::{
    storage::{KeyValueStore, HIDE_BALANCE_KEY, THEME_KEY},
    CoreError,
};

/// Reads preferences fresh from the store on every call, so changes made by
/// another handle on the same store are picked up.
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn hide_balance(&self) -> bool {
        self.read(HIDE_BALANCE_KEY).as_deref() == Some("true")
    }

    pub fn set_hide_balance(&self, hidden: bool) -> Result<(), CoreError> {
        let value = if hidden { "true" } else { "false" };
        self.store.set(HIDE_BALANCE_KEY, value)?;
        debug!(hidden, "balance visibility updated");
        Ok(())
    }

    /// Flips the stored flag and returns the new value.
    pub fn toggle_hide_balance(&self) -> Result<bool, CoreError> {
        let hidden = !self.hide_balance();
        self.set_hide_balance(hidden)?;
        Ok(hidden)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.read(THEME_KEY).as_deref())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), CoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        debug!(%theme, "theme updated");
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<Theme, CoreError> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            hide_balance: self.hide_balance(),
            theme: self.theme(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "could not read preference; using default");
                None
            }
        }
    }
}
