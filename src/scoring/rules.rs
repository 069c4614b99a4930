use serde::{Deserialize, Serialize};

use crate::catalog::domain::{Question, ScoreType};

/// A respondent's answer to a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Yes,
    Partial,
    No,
}

impl AnswerValue {
    pub const fn label(self) -> &'static str {
        match self {
            AnswerValue::Yes => "yes",
            AnswerValue::Partial => "partial",
            AnswerValue::No => "no",
        }
    }
}

/// Points awarded for one answer.
///
/// A partial answer always grants half the question's value, whatever its
/// score type. Otherwise credit is granted only when the answer matches the
/// question's configured full-credit side: "yes" for `full`, "no" for `none`.
/// `half` questions therefore score through the partial path or not at all,
/// and the rule never cross-checks the question's answer type.
pub fn score_answer(question: &Question, answer: AnswerValue) -> f64 {
    match answer {
        AnswerValue::Partial => f64::from(question.score_value) / 2.0,
        AnswerValue::Yes if question.score_type == ScoreType::Full => {
            f64::from(question.score_value)
        }
        AnswerValue::No if question.score_type == ScoreType::None => {
            f64::from(question.score_value)
        }
        _ => 0.0,
    }
}
