use crate::assessments::domain::Assessment;
use crate::catalog::domain::{CatalogSnapshot, Group, Question};
use crate::scoring::{percentage, AnswerValue, ScoringError};

/// One stored answer joined with its current catalog question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub question: Question,
    pub answer: AnswerValue,
    pub score: f64,
}

/// Per-pillar aggregation over the answers that still resolve in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBreakdown {
    pub group: Group,
    pub earned: f64,
    pub possible: f64,
    pub entries: Vec<AnsweredQuestion>,
}

/// A stored assessment joined against the current catalog for display.
///
/// The rendered groups carry only answers whose question still exists; the
/// totals stay authoritative regardless, so editing or deleting catalog
/// questions after the fact never changes a recorded score.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentBreakdown {
    pub groups: Vec<GroupBreakdown>,
    /// Sum over every stored answer, orphaned ones included.
    pub total_score: f64,
    /// Sum of `score_value` over the current catalog.
    pub max_possible_score: f64,
}

impl AssessmentBreakdown {
    pub fn percentage(&self) -> Result<f64, ScoringError> {
        percentage(self.total_score, self.max_possible_score)
    }
}

/// Group a stored assessment's answers by the current catalog, in catalog
/// order. Answers referencing a deleted question are skipped, never an error;
/// pillars with no answered questions are omitted from the rendered list.
pub fn breakdown(snapshot: &CatalogSnapshot, assessment: &Assessment) -> AssessmentBreakdown {
    let mut groups = Vec::new();

    for pillar in &snapshot.pillars {
        let mut entries = Vec::new();
        let mut earned = 0.0;
        let mut possible = 0.0;

        for question in &pillar.questions {
            let Some(stored) = assessment
                .answers
                .iter()
                .find(|answer| answer.question_id == question.id)
            else {
                continue;
            };
            earned += stored.score;
            possible += f64::from(question.score_value);
            entries.push(AnsweredQuestion {
                question: question.clone(),
                answer: stored.answer,
                score: stored.score,
            });
        }

        if entries.is_empty() {
            continue;
        }
        groups.push(GroupBreakdown {
            group: pillar.group.clone(),
            earned,
            possible,
            entries,
        });
    }

    AssessmentBreakdown {
        groups,
        total_score: assessment.total_score(),
        max_possible_score: snapshot.max_possible_score(),
    }
}
