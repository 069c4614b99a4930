//! Core of the business self-assessment tool: the question catalog authored in
//! the backoffice, the scoring rules applied to a respondent's answers, the
//! repository of completed assessments, and the reporting layer that joins
//! stored answers back against the live catalog.
//!
//! Page rendering, navigation, and document layout live in the embedding
//! application; this crate only consumes the injected [`store::StateStore`],
//! [`infra::IdGenerator`], and [`infra::Clock`] collaborators.

pub mod assessments;
pub mod catalog;
pub mod infra;
pub mod report;
pub mod scoring;
pub mod sessions;
pub mod store;
