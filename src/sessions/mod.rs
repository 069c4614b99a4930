//! In-progress questionnaire state: one answer sheet per respondent run.
//!
//! The session only tracks answers and pillar navigation; it is discarded once
//! the sheet is graded and handed to the repository.

use crate::catalog::domain::{AnswerType, CatalogSnapshot, QuestionId};
use crate::scoring::{AnswerSheet, AnswerValue};

/// Answer options offered to the respondent for a question's answer type.
/// `yes_no` questions never offer partial; the scoring rule itself stays
/// permissive about what it is handed.
pub const fn answer_options(answer_type: AnswerType) -> &'static [AnswerValue] {
    match answer_type {
        AnswerType::YesNo => &[AnswerValue::Yes, AnswerValue::No],
        AnswerType::YesPartialNo => &[AnswerValue::Yes, AnswerValue::Partial, AnswerValue::No],
    }
}

/// Mutable state of one guided questionnaire run.
#[derive(Debug, Default, Clone)]
pub struct QuestionnaireSession {
    answers: AnswerSheet,
    current_group: usize,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn answer(&self, question_id: &QuestionId) -> Option<AnswerValue> {
        self.answers.get(question_id).copied()
    }

    /// Record an answer. Recording the value already present clears it
    /// instead, mirroring the toggle behavior of the questionnaire buttons.
    pub fn record(&mut self, question_id: QuestionId, value: AnswerValue) {
        if self.answers.get(&question_id) == Some(&value) {
            self.answers.remove(&question_id);
        } else {
            self.answers.insert(question_id, value);
        }
    }

    pub fn clear(&mut self, question_id: &QuestionId) {
        self.answers.remove(question_id);
    }

    /// Overall progress percentage, clamped to 100. An empty catalog reports
    /// zero progress rather than an error.
    pub fn progress(&self, snapshot: &CatalogSnapshot) -> f64 {
        let total = snapshot.total_questions();
        if total == 0 {
            return 0.0;
        }
        let ratio = self.answers.len() as f64 / total as f64;
        (ratio * 100.0).min(100.0)
    }

    /// Whether every question of the pillar at `index` has an answer. A pillar
    /// with no questions counts as complete.
    pub fn group_complete(&self, snapshot: &CatalogSnapshot, index: usize) -> bool {
        match snapshot.pillars.get(index) {
            Some(pillar) => pillar
                .questions
                .iter()
                .all(|question| self.answers.contains_key(&question.id)),
            None => false,
        }
    }

    /// Whether every question in the catalog has an answer.
    pub fn complete(&self, snapshot: &CatalogSnapshot) -> bool {
        snapshot
            .questions()
            .all(|question| self.answers.contains_key(&question.id))
    }

    pub fn current_group(&self) -> usize {
        self.current_group
    }

    /// Move to the next pillar. Advancing requires the current pillar to be
    /// fully answered and another pillar to exist; returns whether it moved.
    pub fn advance(&mut self, snapshot: &CatalogSnapshot) -> bool {
        if self.current_group + 1 >= snapshot.pillars.len() {
            return false;
        }
        if !self.group_complete(snapshot, self.current_group) {
            return false;
        }
        self.current_group += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.current_group == 0 {
            return false;
        }
        self.current_group -= 1;
        true
    }
}
