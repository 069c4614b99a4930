use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::{PersistedState, StateStore, StoreError};

/// JSON-file store: the whole state record serialized pretty-printed to a
/// single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&contents)?;
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_vec_pretty(state)?;
        fs::write(&self.path, body)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
