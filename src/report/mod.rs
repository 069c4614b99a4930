//! Reporting layer: stored assessments joined against the *current* catalog.
//!
//! There is no catalog versioning. Historical totals were computed at
//! completion time and stay authoritative; question text and numbering are
//! joined live, and answers whose question has been deleted are simply not
//! rendered.

mod export;
mod summary;
mod views;

#[cfg(test)]
mod tests;

pub use export::{
    document_payload, suggested_filename, write_summary_csv, DocumentAnswer, DocumentPayload,
    DocumentRenderer, ExportError,
};
pub use summary::{breakdown, AnsweredQuestion, AssessmentBreakdown, GroupBreakdown};
pub use views::{
    detail, summarize, AnswerEntryView, AssessmentDetailView, AssessmentSummaryView,
    GroupBreakdownView,
};
