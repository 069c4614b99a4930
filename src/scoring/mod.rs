//! Scoring engine: the per-answer rule plus aggregation into a scorecard.
//!
//! The same code path runs at questionnaire completion and again whenever a
//! stored assessment is redisplayed or exported, so both produce identical
//! figures for identical inputs.

mod rules;

pub use rules::{score_answer, AnswerValue};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::domain::{CatalogSnapshot, QuestionId};

/// Ordered mapping from question to the respondent's answer. Aggregation
/// walks the catalog snapshot, not this map, so results never depend on
/// insertion order.
pub type AnswerSheet = BTreeMap<QuestionId, AnswerValue>;

/// The persisted, immutable result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: QuestionId,
    pub answer: AnswerValue,
    pub score: f64,
}

/// Completion-time scoring result for a whole answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub answers: Vec<ScoredAnswer>,
    pub total_score: f64,
    /// Sum of `score_value` over the entire catalog, answered or not.
    pub max_possible_score: f64,
}

impl Scorecard {
    pub fn percentage(&self) -> Result<f64, ScoringError> {
        percentage(self.total_score, self.max_possible_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("cannot compute a percentage against an empty catalog")]
    EmptyCatalog,
}

/// Score every answered question in catalog order. Unanswered questions
/// contribute nothing to the total but keep their weight in the maximum.
pub fn grade(snapshot: &CatalogSnapshot, sheet: &AnswerSheet) -> Scorecard {
    let mut answers = Vec::with_capacity(sheet.len());
    let mut total_score = 0.0;

    for question in snapshot.questions() {
        let Some(answer) = sheet.get(&question.id) else {
            continue;
        };
        let score = score_answer(question, *answer);
        total_score += score;
        answers.push(ScoredAnswer {
            question_id: question.id.clone(),
            answer: *answer,
            score,
        });
    }

    Scorecard {
        answers,
        total_score,
        max_possible_score: snapshot.max_possible_score(),
    }
}

/// Shared percentage computation for completion, review, and export paths.
/// An empty catalog is a reported error, never NaN in stored or displayed
/// state.
pub fn percentage(total: f64, max: f64) -> Result<f64, ScoringError> {
    if max == 0.0 {
        return Err(ScoringError::EmptyCatalog);
    }
    Ok(total / max * 100.0)
}

/// One-decimal display form used by the results list, detail view, and
/// exports.
pub fn percent_display(total: f64, max: f64) -> Result<String, ScoringError> {
    percentage(total, max).map(|value| format!("{value:.1}"))
}
