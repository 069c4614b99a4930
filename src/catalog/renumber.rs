//! Compact-and-renumber pass run after every structural deletion.
//!
//! Stale `order`/`number` values corrupt both display ordering and the next
//! insertion (which derives its rank from the current count), so deletions and
//! renumbering always land in the same commit.

use super::domain::{Group, Question};

/// Reassign dense zero-based orders to the surviving groups, preserving their
/// relative ordering.
pub fn renumber_groups(mut groups: Vec<Group>) -> Vec<Group> {
    groups.sort_by_key(|group| group.order);
    for (index, group) in groups.iter_mut().enumerate() {
        group.order = index;
    }
    groups
}

/// Reassign dense zero-based orders to one group's surviving questions and
/// recompute their `"<pillar>.<position>"` display numbers from the owning
/// group's current order.
pub fn renumber_questions(group_order: usize, mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|question| question.order);
    for (index, question) in questions.iter_mut().enumerate() {
        question.order = index;
        question.number = format!("{}.{}", group_order + 1, index + 1);
    }
    questions
}
