use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::assessments::{AssessmentRepository, RespondentProfile};
use crate::catalog::QuestionId;
use crate::infra::{Clock, IdGenerator};
use crate::scoring::{AnswerValue, ScoredAnswer};
use crate::store::{MemoryStore, PersistedState, SharedState, StateStore, StoreError};

#[derive(Default)]
pub(super) struct SequenceIds {
    next: AtomicU64,
}

impl IdGenerator for SequenceIds {
    fn new_id(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("assessment-{id}")
    }
}

pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
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

pub(super) fn completion_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).single().expect("valid timestamp")
}

pub(super) fn build_repository() -> (
    AssessmentRepository<MemoryStore, SequenceIds, FixedClock>,
    MemoryStore,
) {
    let store = MemoryStore::default();
    let shared = Arc::new(SharedState::open(store.clone()).expect("open store"));
    let repository = AssessmentRepository::new(
        shared,
        Arc::new(SequenceIds::default()),
        Arc::new(FixedClock(completion_time())),
    );
    (repository, store)
}

pub(super) fn profile(client: &str, company: &str, cnpj: &str) -> RespondentProfile {
    RespondentProfile {
        client_name: client.to_string(),
        company_name: company.to_string(),
        cnpj: cnpj.to_string(),
        has_partners: "Sim".to_string(),
        revenue: "R$ 100.000,00".to_string(),
        sector: "Comércio".to_string(),
        time_in_business: "1 a 3 anos".to_string(),
        employees_count: "8".to_string(),
        location: "Curitiba/PR".to_string(),
        legal_form: "LTDA".to_string(),
    }
}

pub(super) fn scored_answers() -> Vec<ScoredAnswer> {
    vec![
        ScoredAnswer {
            question_id: QuestionId("q-1".to_string()),
            answer: AnswerValue::Yes,
            score: 10.0,
        },
        ScoredAnswer {
            question_id: QuestionId("q-2".to_string()),
            answer: AnswerValue::Partial,
            score: 10.0,
        },
    ]
}
