use std::sync::Arc;

use tracing::info;

use super::domain::{Assessment, AssessmentId, RespondentProfile};
use crate::infra::{Clock, IdGenerator};
use crate::scoring::ScoredAnswer;
use crate::store::{SharedState, StateStore, StoreError};

/// Error enumeration for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("assessment not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store of completed assessments. Creation assigns identity and timestamp;
/// records are immutable afterwards except for permanent deletion.
pub struct AssessmentRepository<S: StateStore, I: IdGenerator, C: Clock> {
    shared: Arc<SharedState<S>>,
    ids: Arc<I>,
    clock: Arc<C>,
}

impl<S, I, C> AssessmentRepository<S, I, C>
where
    S: StateStore,
    I: IdGenerator,
    C: Clock,
{
    pub fn new(shared: Arc<SharedState<S>>, ids: Arc<I>, clock: Arc<C>) -> Self {
        Self { shared, ids, clock }
    }

    /// Persist a completed run with its already-scored answers. The record and
    /// all its answers land in one commit: either everything is stored, or the
    /// error is reported and nothing changed.
    pub fn create(
        &self,
        profile: RespondentProfile,
        answers: Vec<ScoredAnswer>,
    ) -> Result<Assessment, RepositoryError> {
        let assessment = Assessment {
            id: AssessmentId(self.ids.new_id()),
            profile,
            created_at: self.clock.now(),
            answers,
        };

        let assessment = self.shared.commit(move |state| {
            state.assessments.push(assessment.clone());
            Ok::<_, RepositoryError>(assessment)
        })?;

        info!(assessment = %assessment.id.0, answers = assessment.answers.len(), "assessment recorded");
        Ok(assessment)
    }

    pub fn list(&self) -> Vec<Assessment> {
        self.shared.read(|state| state.assessments.clone())
    }

    pub fn find_by_id(&self, id: &AssessmentId) -> Option<Assessment> {
        self.shared.read(|state| {
            state
                .assessments
                .iter()
                .find(|assessment| &assessment.id == id)
                .cloned()
        })
    }

    /// Permanent deletion; there is no soft-delete.
    pub fn delete(&self, id: &AssessmentId) -> Result<(), RepositoryError> {
        self.shared.commit(|state| {
            let before = state.assessments.len();
            state.assessments.retain(|assessment| &assessment.id != id);
            if state.assessments.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })?;

        info!(assessment = %id.0, "assessment deleted");
        Ok(())
    }

    /// Case-insensitive substring search over client name, company name, and
    /// tax id; an empty term returns every assessment.
    pub fn search(&self, term: &str) -> Vec<Assessment> {
        self.shared.read(|state| {
            state
                .assessments
                .iter()
                .filter(|assessment| assessment.profile.matches(term))
                .cloned()
                .collect()
        })
    }
}
