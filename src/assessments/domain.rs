use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoredAnswer;

/// Identifier wrapper for completed assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Respondent intake data captured before the questionnaire starts, stored
/// verbatim as free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub client_name: String,
    pub company_name: String,
    pub cnpj: String,
    pub has_partners: String,
    pub revenue: String,
    pub sector: String,
    pub time_in_business: String,
    pub employees_count: String,
    pub location: String,
    pub legal_form: String,
}

impl RespondentProfile {
    /// Case-insensitive substring match against client name, company name, or
    /// tax id. The empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.client_name.to_lowercase().contains(&term)
            || self.company_name.to_lowercase().contains(&term)
            || self.cnpj.to_lowercase().contains(&term)
    }
}

/// One completed respondent run: profile plus the scored answers, immutable
/// after creation. `id` and `created_at` are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    #[serde(flatten)]
    pub profile: RespondentProfile,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<ScoredAnswer>,
}

impl Assessment {
    /// Authoritative total: the sum of every stored answer's score, including
    /// answers whose question has since been deleted from the catalog.
    pub fn total_score(&self) -> f64 {
        self.answers.iter().map(|answer| answer.score).sum()
    }
}
