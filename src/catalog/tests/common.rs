use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::catalog::{CatalogPolicy, CatalogService};
use crate::infra::IdGenerator;
use crate::store::{MemoryStore, PersistedState, SharedState, StateStore, StoreError};

/// Deterministic id source so assertions can reason about identity.
#[derive(Default)]
pub(super) struct SequenceIds {
    next: AtomicU64,
}

impl IdGenerator for SequenceIds {
    fn new_id(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{id}")
    }
}

pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        Ok(None)
    }

    fn save(&self, _state: &PersistedState) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (CatalogService<MemoryStore, SequenceIds>, MemoryStore) {
    let store = MemoryStore::default();
    let shared = Arc::new(SharedState::open(store.clone()).expect("open store"));
    let service = CatalogService::new(
        shared,
        Arc::new(SequenceIds::default()),
        CatalogPolicy::default(),
    );
    (service, store)
}

pub(super) fn unavailable_service() -> CatalogService<UnavailableStore, SequenceIds> {
    let shared = Arc::new(SharedState::open(UnavailableStore).expect("open store"));
    CatalogService::new(
        shared,
        Arc::new(SequenceIds::default()),
        CatalogPolicy::default(),
    )
}
