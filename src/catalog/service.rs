use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{
    CatalogSnapshot, Group, GroupId, GroupPatch, Pillar, Question, QuestionDraft, QuestionId,
    QuestionPatch,
};
use super::policy::CatalogPolicy;
use super::renumber::{renumber_groups, renumber_questions};
use crate::infra::IdGenerator;
use crate::store::{PersistedState, SharedState, StateStore, StoreError};

/// Error enumeration for catalog authoring operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("pillar limit of {limit} reached")]
    GroupCapacity { limit: usize },
    #[error("this pillar already holds the maximum of {limit} questions")]
    QuestionCapacity { limit: usize },
    #[error("pillar not found")]
    GroupNotFound,
    #[error("question not found")]
    QuestionNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Authoring service for the question catalog. Every mutation is validated,
/// applied, and persisted in one commit; deletions carry their renumbering
/// pass inside the same commit.
pub struct CatalogService<S: StateStore, I: IdGenerator> {
    shared: Arc<SharedState<S>>,
    ids: Arc<I>,
    policy: CatalogPolicy,
}

impl<S, I> CatalogService<S, I>
where
    S: StateStore,
    I: IdGenerator,
{
    pub fn new(shared: Arc<SharedState<S>>, ids: Arc<I>, policy: CatalogPolicy) -> Self {
        Self {
            shared,
            ids,
            policy,
        }
    }

    pub fn policy(&self) -> CatalogPolicy {
        self.policy
    }

    /// Append a new pillar, ranked after the existing ones.
    pub fn add_group(&self, name: impl Into<String>) -> Result<Group, CatalogError> {
        let name = name.into();
        let id = GroupId(self.ids.new_id());
        let limit = self.policy.max_groups;

        let group = self.shared.commit(move |state| {
            if state.groups.len() >= limit {
                return Err(CatalogError::GroupCapacity { limit });
            }
            let group = Group {
                id,
                name,
                order: state.groups.len(),
            };
            state.groups.push(group.clone());
            Ok(group)
        })?;

        info!(group = %group.id.0, order = group.order, "pillar added");
        Ok(group)
    }

    pub fn update_group(&self, id: &GroupId, patch: GroupPatch) -> Result<Group, CatalogError> {
        let group = self.shared.commit(|state| {
            let group = state
                .groups
                .iter_mut()
                .find(|group| &group.id == id)
                .ok_or(CatalogError::GroupNotFound)?;
            if let Some(name) = patch.name {
                group.name = name;
            }
            Ok::<_, CatalogError>(group.clone())
        })?;

        debug!(group = %group.id.0, "pillar updated");
        Ok(group)
    }

    /// Remove a pillar and every question it owns, then renumber what remains.
    pub fn delete_group(&self, id: &GroupId) -> Result<(), CatalogError> {
        self.shared.commit(|state| {
            let before = state.groups.len();
            state.groups.retain(|group| &group.id != id);
            if state.groups.len() == before {
                return Err(CatalogError::GroupNotFound);
            }
            state.questions.retain(|question| &question.group_id != id);
            compact(state);
            Ok(())
        })?;

        info!(group = %id.0, "pillar deleted");
        Ok(())
    }

    /// Append a new question to a pillar, numbered from its position.
    pub fn add_question(
        &self,
        group_id: &GroupId,
        draft: QuestionDraft,
    ) -> Result<Question, CatalogError> {
        let id = QuestionId(self.ids.new_id());
        let limit = self.policy.max_questions_per_group;

        let question = self.shared.commit(move |state| {
            let pillar_number = state
                .groups
                .iter()
                .find(|group| &group.id == group_id)
                .map(Group::pillar_number)
                .ok_or(CatalogError::GroupNotFound)?;
            let position = state
                .questions
                .iter()
                .filter(|question| &question.group_id == group_id)
                .count();
            if position >= limit {
                return Err(CatalogError::QuestionCapacity { limit });
            }
            let question = Question {
                id,
                group_id: group_id.clone(),
                number: format!("{}.{}", pillar_number, position + 1),
                text: draft.text,
                score_value: draft.score_value,
                score_type: draft.score_type,
                answer_type: draft.answer_type,
                order: position,
            };
            state.questions.push(question.clone());
            Ok(question)
        })?;

        info!(question = %question.id.0, number = %question.number, "question added");
        Ok(question)
    }

    pub fn update_question(
        &self,
        id: &QuestionId,
        patch: QuestionPatch,
    ) -> Result<Question, CatalogError> {
        let question = self.shared.commit(|state| {
            let question = state
                .questions
                .iter_mut()
                .find(|question| &question.id == id)
                .ok_or(CatalogError::QuestionNotFound)?;
            if let Some(text) = patch.text {
                question.text = text;
            }
            if let Some(score_value) = patch.score_value {
                question.score_value = score_value;
            }
            if let Some(score_type) = patch.score_type {
                question.score_type = score_type;
            }
            if let Some(answer_type) = patch.answer_type {
                question.answer_type = answer_type;
            }
            Ok::<_, CatalogError>(question.clone())
        })?;

        debug!(question = %question.id.0, "question updated");
        Ok(question)
    }

    /// Remove a question and renumber its surviving siblings.
    pub fn delete_question(&self, id: &QuestionId) -> Result<(), CatalogError> {
        self.shared.commit(|state| {
            let before = state.questions.len();
            state.questions.retain(|question| &question.id != id);
            if state.questions.len() == before {
                return Err(CatalogError::QuestionNotFound);
            }
            compact(state);
            Ok(())
        })?;

        info!(question = %id.0, "question deleted");
        Ok(())
    }

    /// Ordered view of the live catalog.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.shared.read(|state| {
            let mut groups = state.groups.clone();
            groups.sort_by_key(|group| group.order);
            let pillars = groups
                .into_iter()
                .map(|group| {
                    let mut questions: Vec<Question> = state
                        .questions
                        .iter()
                        .filter(|question| question.group_id == group.id)
                        .cloned()
                        .collect();
                    questions.sort_by_key(|question| question.order);
                    Pillar { group, questions }
                })
                .collect();
            CatalogSnapshot { pillars }
        })
    }
}

/// Re-derive dense orders and display numbers for the whole catalog. Groups
/// unaffected by a deletion come out unchanged.
fn compact(state: &mut PersistedState) {
    state.groups = renumber_groups(std::mem::take(&mut state.groups));

    let mut remaining = std::mem::take(&mut state.questions);
    let mut questions = Vec::with_capacity(remaining.len());
    for group in &state.groups {
        let (mine, rest): (Vec<Question>, Vec<Question>) = remaining
            .into_iter()
            .partition(|question| question.group_id == group.id);
        questions.extend(renumber_questions(group.order, mine));
        remaining = rest;
    }
    state.questions = questions;
}
