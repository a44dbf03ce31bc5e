//! The persisted ledger document and its helpers.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;
