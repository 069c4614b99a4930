use serde::{Deserialize, Serialize};

/// Authoring capacity policy. These are product constraints, not engineering
/// limits; exceeding them is rejected with a user-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPolicy {
    pub max_groups: usize,
    pub max_questions_per_group: usize,
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            max_groups: 5,
            max_questions_per_group: 5,
        }
    }
}
