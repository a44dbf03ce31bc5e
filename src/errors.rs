use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}

/// Failures surfaced by document stores. A `VersionConflict` is
/// recoverable: the in-memory ledger is never rolled back, the caller
/// decides whether to retry or report.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("version conflict: store holds `{found}`, caller supplied `{expected}`")]
    VersionConflict { expected: String, found: String },
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}
