//! Durable persistence seam: one state record behind a `load`/`save` trait.

mod file;
mod memory;
mod shared;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use shared::SharedState;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assessments::domain::Assessment;
use crate::catalog::domain::{Group, Question};

/// The single record written to durable storage: the whole catalog plus every
/// completed assessment, in one namespace. There is no schema version field;
/// migrating stored shapes is the embedding application's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub groups: Vec<Group>,
    pub questions: Vec<Question>,
    pub assessments: Vec<Assessment>,
}

/// Storage abstraction so the catalog and repository can be exercised against
/// in-memory, file-backed, or failing stores.
pub trait StateStore: Send + Sync {
    /// Load the persisted record. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<PersistedState>, StoreError>;

    /// Replace the persisted record.
    fn save(&self, state: &PersistedState) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
