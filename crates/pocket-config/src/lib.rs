//! pocket-config
//!
//! Terminal front-end settings: the `Config` model and its JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, SETTABLE_KEYS};
