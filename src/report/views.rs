use chrono::{DateTime, Utc};
use serde::Serialize;

use super::summary::{breakdown, AssessmentBreakdown};
use crate::assessments::domain::{Assessment, AssessmentId, RespondentProfile};
use crate::catalog::domain::CatalogSnapshot;
use crate::scoring::{percent_display, AnswerValue};

/// Row for the results list: one per stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryView {
    pub id: AssessmentId,
    pub client_name: String,
    pub company_name: String,
    pub cnpj: String,
    pub created_at: DateTime<Utc>,
    pub total_score: f64,
    pub max_possible_score: f64,
    /// One-decimal display percentage; absent when the catalog is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
}

pub fn summarize(snapshot: &CatalogSnapshot, assessment: &Assessment) -> AssessmentSummaryView {
    let total_score = assessment.total_score();
    let max_possible_score = snapshot.max_possible_score();
    AssessmentSummaryView {
        id: assessment.id.clone(),
        client_name: assessment.profile.client_name.clone(),
        company_name: assessment.profile.company_name.clone(),
        cnpj: assessment.profile.cnpj.clone(),
        created_at: assessment.created_at,
        total_score,
        max_possible_score,
        percentage: percent_display(total_score, max_possible_score).ok(),
    }
}

/// One rendered answer line in the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerEntryView {
    pub number: String,
    pub text: String,
    pub answer: AnswerValue,
    pub answer_label: &'static str,
    pub score: f64,
    pub score_value: u32,
}

/// Per-pillar section of the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct GroupBreakdownView {
    pub name: String,
    pub pillar_number: usize,
    pub earned: f64,
    pub possible: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    pub entries: Vec<AnswerEntryView>,
}

/// Full detail of one assessment for the results screen and exports.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentDetailView {
    pub id: AssessmentId,
    #[serde(flatten)]
    pub profile: RespondentProfile,
    pub created_at: DateTime<Utc>,
    pub groups: Vec<GroupBreakdownView>,
    pub total_score: f64,
    pub max_possible_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
}

impl AssessmentBreakdown {
    pub fn to_view(&self, assessment: &Assessment) -> AssessmentDetailView {
        let groups = self
            .groups
            .iter()
            .map(|group| GroupBreakdownView {
                name: group.group.name.clone(),
                pillar_number: group.group.pillar_number(),
                earned: group.earned,
                possible: group.possible,
                percentage: percent_display(group.earned, group.possible).ok(),
                entries: group
                    .entries
                    .iter()
                    .map(|entry| AnswerEntryView {
                        number: entry.question.number.clone(),
                        text: entry.question.text.clone(),
                        answer: entry.answer,
                        answer_label: entry.answer.label(),
                        score: entry.score,
                        score_value: entry.question.score_value,
                    })
                    .collect(),
            })
            .collect();

        AssessmentDetailView {
            id: assessment.id.clone(),
            profile: assessment.profile.clone(),
            created_at: assessment.created_at,
            groups,
            total_score: self.total_score,
            max_possible_score: self.max_possible_score,
            percentage: percent_display(self.total_score, self.max_possible_score).ok(),
        }
    }
}

/// Convenience join for the results screen.
pub fn detail(snapshot: &CatalogSnapshot, assessment: &Assessment) -> AssessmentDetailView {
    breakdown(snapshot, assessment).to_view(assessment)
}
