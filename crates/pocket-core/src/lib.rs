//! pocket-core
//!
//! Business logic and services for Pocket Ledger.
//! Depends on pocket-domain. No CLI, no terminal I/O; persistence goes through
//! the [`storage::KeyValueStore`] seam.

pub mod aggregate_service;
pub mod alert_service;
pub mod dashboard;
pub mod error;
pub mod filter_service;
pub mod format;
pub mod ledger_store;
pub mod preference_service;
pub mod storage;
pub mod time;

pub use aggregate_service::*;
pub use alert_service::*;
pub use dashboard::*;
pub use error::CoreError;
pub use filter_service::*;
pub use format::*;
pub use ledger_store::*;
pub use preference_service::*;
pub use storage::{KeyValueStore, MemoryStore};
pub use time::*;

#[cfg(test)]
mod tests;
