use std::sync::{Arc, Mutex};

use super::{PersistedState, StateStore, StoreError};

/// In-memory store. Clones share the same record, so a second handle opened
/// over a clone observes everything the first one saved.
#[derive(Default, Clone)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<PersistedState>>>,
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        let guard = self.record.lock().expect("store mutex poisoned");
        Ok(guard.clone())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        let mut guard = self.record.lock().expect("store mutex poisoned");
        *guard = Some(state.clone());
        Ok(())
    }
}
