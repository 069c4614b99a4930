//! Question catalog: pillar/question domain model, authoring service with
//! capacity policy, and the renumbering pass that keeps ranks contiguous.

pub mod domain;
mod policy;
pub mod renumber;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerType, CatalogSnapshot, Group, GroupId, GroupPatch, Pillar, Question, QuestionDraft,
    QuestionId, QuestionPatch, ScoreType,
};
pub use policy::CatalogPolicy;
pub use service::{CatalogError, CatalogService};
