pub mod json_store;
pub mod memory;
pub mod session;

use crate::errors::StorageError;
use crate::ledger::Ledger;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use session::Session;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Opaque revision id guarding whole-document writes against lost
/// updates. Callers never inspect it, only hand it back on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Abstraction over document stores holding the whole ledger as one
/// JSON document. Writes are conditioned on the caller's last-seen
/// version token (optimistic concurrency); a mismatch is surfaced as
/// `StorageError::VersionConflict` and never mutates the store.
pub trait DocumentStore: Send + Sync {
    /// Loads the current document, or `None` when the store is empty.
    fn load(&self) -> Result<Option<(Ledger, VersionToken)>>;

    /// Persists the full document. `token` must match the store's
    /// current version; pass `None` only for the initial write.
    fn save(&self, ledger: &Ledger, token: Option<&VersionToken>) -> Result<VersionToken>;
}
