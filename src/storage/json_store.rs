//! On-device document store backed by a JSON file with atomic writes
//! and a sidecar state file carrying the revision counter.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::StorageError;
use crate::ledger::Ledger;

use super::{DocumentStore, Result, VersionToken};

const DATA_FILE: &str = "data.json";
const STATE_FILE: &str = "store_state.json";
const TMP_SUFFIX: &str = "tmp";

pub struct JsonFileStore {
    data_file: PathBuf,
    state_file: PathBuf,
}

impl JsonFileStore {
    /// Opens (creating if needed) a store rooted at `root`, or at the
    /// platform data directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self {
            data_file: root.join(DATA_FILE),
            state_file: root.join(STATE_FILE),
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_file
    }

    fn read_state(&self) -> Result<StoreState> {
        if self.state_file.exists() {
            let data = fs::read_to_string(&self.state_file)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(StoreState::default())
        }
    }

    fn write_state(&self, state: &StoreState) -> Result<()> {
        let data = serde_json::to_string_pretty(state)?;
        write_atomic(&self.state_file, &data)?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<(Ledger, VersionToken)>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.data_file)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        let state = self.read_state()?;
        Ok(Some((ledger, VersionToken::new(state.revision.to_string()))))
    }

    fn save(&self, ledger: &Ledger, token: Option<&VersionToken>) -> Result<VersionToken> {
        let mut state = self.read_state()?;
        if self.data_file.exists() {
            let current = state.revision.to_string();
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

        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.data_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.data_file)?;

        state.revision += 1;
        self.write_state(&state)?;
        tracing::debug!(revision = state.revision, "ledger document written");
        Ok(VersionToken::new(state.revision.to_string()))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    revision: u64,
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zenledger")
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
