//! Injectable identifier and clock collaborators.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of globally unique identifiers for groups, questions, and assessments.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Default generator backed by random UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the current time, consulted only when an assessment is created.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
