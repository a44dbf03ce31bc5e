#![doc(test(attr(deny(warnings))))]

//! ZenLedger offers a personal finance ledger with a hierarchical project
//! tree for grouping related spending, persisted as a single versioned
//! JSON document either on-device or in a remote document store.

pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod testdata;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("ZenLedger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
