use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::summary::breakdown;
use super::views::summarize;
use crate::assessments::domain::Assessment;
use crate::catalog::domain::CatalogSnapshot;
use crate::scoring::AnswerValue;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("document renderer error: {0}")]
    Renderer(String),
}

/// Everything an external document renderer needs for one assessment: the
/// respondent header, the answers joined with their current catalog question,
/// and the totals. The rendering format is the renderer's business.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPayload {
    pub client_name: String,
    pub company_name: String,
    pub cnpj: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<DocumentAnswer>,
    pub total_score: f64,
    pub max_possible_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnswer {
    pub number: String,
    pub text: String,
    pub score_value: u32,
    pub answer: AnswerValue,
    pub score: f64,
}

/// Outbound document rendering hook (PDF in the shipped product).
pub trait DocumentRenderer {
    fn render(&self, payload: &DocumentPayload) -> Result<Vec<u8>, ExportError>;
}

/// Build the renderer payload for one assessment, joined against the current
/// catalog in catalog order. Orphaned answers are left out of the listing;
/// the totals still carry their stored scores.
pub fn document_payload(snapshot: &CatalogSnapshot, assessment: &Assessment) -> DocumentPayload {
    let breakdown = breakdown(snapshot, assessment);
    let answers = breakdown
        .groups
        .iter()
        .flat_map(|group| group.entries.iter())
        .map(|entry| DocumentAnswer {
            number: entry.question.number.clone(),
            text: entry.question.text.clone(),
            score_value: entry.question.score_value,
            answer: entry.answer,
            score: entry.score,
        })
        .collect();

    DocumentPayload {
        client_name: assessment.profile.client_name.clone(),
        company_name: assessment.profile.company_name.clone(),
        cnpj: assessment.profile.cnpj.clone(),
        created_at: assessment.created_at,
        answers,
        total_score: breakdown.total_score,
        max_possible_score: breakdown.max_possible_score,
    }
}

/// Filename stem for a downloaded document, `diagnostico-<client>` with the
/// client name lowercased and whitespace collapsed to hyphens.
pub fn suggested_filename(client_name: &str) -> String {
    let slug = client_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("diagnostico-{slug}")
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    client_name: &'a str,
    company_name: &'a str,
    cnpj: &'a str,
    created_at: String,
    total_score: f64,
    max_possible_score: f64,
    percentage: String,
}

/// Write the results-list summary as CSV, one row per assessment. The
/// percentage column uses the same one-decimal form as the screens and is
/// left empty when the catalog is empty.
pub fn write_summary_csv<W: Write>(
    writer: W,
    snapshot: &CatalogSnapshot,
    assessments: &[Assessment],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for assessment in assessments {
        let summary = summarize(snapshot, assessment);
        csv_writer.serialize(SummaryRow {
            client_name: &summary.client_name,
            company_name: &summary.company_name,
            cnpj: &summary.cnpj,
            created_at: summary.created_at.to_rfc3339(),
            total_score: summary.total_score,
            max_possible_score: summary.max_possible_score,
            percentage: summary.percentage.unwrap_or_default(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
