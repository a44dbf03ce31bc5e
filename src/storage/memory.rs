//! In-process document store used by tests and demos.

use std::sync::Mutex;

use crate::errors::StorageError;
use crate::ledger::Ledger;

use super::{DocumentStore, Result, VersionToken};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Document>>,
}

struct Document {
    json: String,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<(Ledger, VersionToken)>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".into()))?;
        match guard.as_ref() {
            None => Ok(None),
            Some(doc) => {
                let ledger: Ledger = serde_json::from_str(&doc.json)?;
                Ok(Some((ledger, VersionToken::new(doc.revision.to_string()))))
            }
        }
    }

    fn save(&self, ledger: &Ledger, token: Option<&VersionToken>) -> Result<VersionToken> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".into()))?;
        if let Some(doc) = guard.as_ref() {
            let current = doc.revision.to_string();
            match token {
                Some(token) if token.as_str() == current => {}
                Some(token) => {
                    return Err(StorageError::VersionConflict {
                        expected: token.as_str().to_string(),
                        found: current,
                    })
                }
                None => {
                    return Err(StorageError::VersionConflict {
                        expected: "<none>".into(),
                        found: current,
                    })
                }
            }
        }
        let revision = guard.as_ref().map_or(1, |doc| doc.revision + 1);
        *guard = Some(Document {
            json: serde_json::to_string(ledger)?,
            revision,
        });
        Ok(VersionToken::new(revision.to_string()))
    }
}
