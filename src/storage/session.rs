//! Local-first persistence driver.
//!
//! The in-memory ledger is the source of truth; the persisted copy is
//! eventually consistent with it. `persist` runs after each mutation
//! and a failure never rolls the ledger back — the caller retries or
//! reports.

use crate::ledger::Ledger;

use super::{DocumentStore, Result, VersionToken};

pub struct Session<S: DocumentStore> {
    store: S,
    token: Option<VersionToken>,
}

impl<S: DocumentStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store, token: None }
    }

    /// Loads the stored document, or a freshly seeded ledger when the
    /// store is empty.
    pub fn open(&mut self) -> Result<Ledger> {
        match self.store.load()? {
            Some((ledger, token)) => {
                self.token = Some(token);
                Ok(ledger)
            }
            None => {
                self.token = None;
                Ok(Ledger::with_defaults())
            }
        }
    }

    /// Writes the whole document conditioned on the last-seen version
    /// token, advancing the token on success.
    pub fn persist(&mut self, ledger: &Ledger) -> Result<()> {
        match self.store.save(ledger, self.token.as_ref()) {
            Ok(token) => {
                self.token = Some(token);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "persist failed; local state kept");
                Err(err)
            }
        }
    }

    /// Discards the held token and re-reads the store, e.g. after a
    /// version conflict the caller chose to resolve by reloading.
    pub fn refresh(&mut self) -> Result<Ledger> {
        self.token = None;
        self.open()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use crate::storage::MemoryStore;

    #[test]
    fn open_seeds_defaults_then_round_trips() {
        let mut session = Session::new(MemoryStore::new());
        let mut ledger = session.open().unwrap();
        assert!(!ledger.categories.is_empty());

        ledger.settings.dark_mode = true;
        session.persist(&ledger).unwrap();
        let reloaded = session.refresh().unwrap();
        assert!(reloaded.settings.dark_mode);
    }

    #[test]
    fn conflict_surfaces_without_rollback() {
        let mut session = Session::new(MemoryStore::new());
        let mut ledger = session.open().unwrap();
        session.persist(&ledger).unwrap();

        // Another writer bumps the revision behind the session's back.
        let (other, token) = session.store().load().unwrap().unwrap();
        session.store().save(&other, Some(&token)).unwrap();

        ledger.settings.dark_mode = true;
        let err = session.persist(&ledger).unwrap_err();
        assert!(matches!(err, StorageError::VersionConflict { .. }));
        // Local mutation survives the failed write.
        assert!(ledger.settings.dark_mode);
    }
}
