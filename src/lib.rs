#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger: a single-user income and expense tracker.
//!
//! The ledger model lives in `pocket-domain`, the services in `pocket-core`,
//! persistence in `pocket-storage-json` and settings in `pocket-config`.
//! This crate wires them into the `pocket_ledger_cli` terminal front-end.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Pocket Ledger tracing initialized.");
    });
}
