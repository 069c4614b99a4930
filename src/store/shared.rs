use std::sync::Mutex;

use super::{PersistedState, StateStore, StoreError};

/// Process-local state shared by the catalog service and the assessment
/// repository, with write-through persistence on every mutation.
///
/// Mutations run against a scratch copy which is saved before being swapped
/// into memory, so a failed save leaves the in-memory state exactly as the
/// durable state: unchanged.
pub struct SharedState<S: StateStore> {
    store: S,
    state: Mutex<PersistedState>,
}

impl<S: StateStore> SharedState<S> {
    /// Open the handle, loading whatever the store currently holds.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self {
            store,
            state: Mutex::new(state),
        })
    }

    pub fn read<T>(&self, f: impl FnOnce(&PersistedState) -> T) -> T {
        let guard = self.state.lock().expect("state mutex poisoned");
        f(&guard)
    }

    /// Apply a mutation transactionally. The closure may reject the change by
    /// returning an error, in which case nothing is saved; a save failure is
    /// surfaced through the same error type and also discards the change.
    pub fn commit<T, E>(
        &self,
        f: impl FnOnce(&mut PersistedState) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.state.lock().expect("state mutex poisoned");
        let mut scratch = guard.clone();
        let value = f(&mut scratch)?;
        self.store.save(&scratch)?;
        *guard = scratch;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{Group, GroupId};
    use crate::store::MemoryStore;

    struct RejectingStore;

    impl StateStore for RejectingStore {
        fn load(&self) -> Result<Option<PersistedState>, StoreError> {
            Ok(None)
        }

        fn save(&self, _state: &PersistedState) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk full".to_string()))
        }
    }

    fn group() -> Group {
        Group {
            id: GroupId("g-1".to_string()),
            name: "Gestão Financeira".to_string(),
            order: 0,
        }
    }

    #[test]
    fn commit_swaps_state_after_save() {
        let store = MemoryStore::default();
        let shared = SharedState::open(store.clone()).expect("open");
        shared
            .commit::<_, StoreError>(|state| {
                state.groups.push(group());
                Ok(())
            })
            .expect("commit succeeds");

        assert_eq!(shared.read(|state| state.groups.len()), 1);
        let saved = store.load().expect("load").expect("state saved");
        assert_eq!(saved.groups.len(), 1);
    }

    #[test]
    fn failed_save_leaves_memory_untouched() {
        let shared = SharedState::open(RejectingStore).expect("open");
        let result = shared.commit::<_, StoreError>(|state| {
            state.groups.push(group());
            Ok(())
        });
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert!(shared.read(|state| state.groups.is_empty()));
    }

    #[test]
    fn rejected_mutation_is_not_saved() {
        let store = MemoryStore::default();
        let shared = SharedState::open(store.clone()).expect("open");
        let result: Result<(), StoreError> = shared.commit(|state| {
            state.groups.push(group());
            Err(StoreError::Unavailable("validation rejected".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(store.load().expect("load"), None);
        assert!(shared.read(|state| state.groups.is_empty()));
    }
}
