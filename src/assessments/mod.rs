//! Completed assessments: respondent profile, scored answers, repository.

pub mod domain;
mod repository;

#[cfg(test)]
mod tests;

pub use domain::{Assessment, AssessmentId, RespondentProfile};
pub use repository::{AssessmentRepository, RepositoryError};
