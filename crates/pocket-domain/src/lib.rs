//! pocket-domain
//!
//! Pure domain models (Transaction, EntryDate, Ledger, MonthKey, totals, preferences).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod date;
pub mod ledger;
pub mod month;
pub mod preferences;
pub mod summary;
pub mod transaction;

pub use common::*;
pub use date::*;
pub use ledger::*;
pub use month::*;
pub use preferences::*;
pub use summary::*;
pub use transaction::*;
