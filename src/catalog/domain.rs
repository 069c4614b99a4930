use serde::{Deserialize, Serialize};

/// Identifier wrapper for scoring groups ("pillars").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub String);

/// Identifier wrapper for questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// Top-level scoring category. `order` is a dense zero-based rank that drives
/// both display ordering and the human-visible pillar number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub order: usize,
}

impl Group {
    /// Human-visible pillar number, `order + 1`.
    pub fn pillar_number(&self) -> usize {
        self.order + 1
    }
}

/// Rule selecting which non-partial answer grants full credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// Full credit on "yes".
    Full,
    /// Credit only ever through a "partial" answer.
    Half,
    /// Full credit on "no".
    None,
}

impl ScoreType {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreType::Full => "full",
            ScoreType::Half => "half",
            ScoreType::None => "none",
        }
    }
}

/// Which answer options the question offers to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    YesNo,
    YesPartialNo,
}

impl AnswerType {
    pub const fn label(self) -> &'static str {
        match self {
            AnswerType::YesNo => "yes_no",
            AnswerType::YesPartialNo => "yes_partial_no",
        }
    }
}

/// A catalog question. `number` is the display label `"<pillar>.<position>"`
/// and `order` the dense zero-based rank within the owning group; both are
/// maintained exclusively by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub group_id: GroupId,
    pub number: String,
    pub text: String,
    pub score_value: u32,
    pub score_type: ScoreType,
    pub answer_type: AnswerType,
    pub order: usize,
}

/// Caller-supplied fields for a new question. Identity, numbering, and rank
/// are derived by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub score_value: u32,
    pub score_type: ScoreType,
    pub answer_type: AnswerType,
}

impl Default for QuestionDraft {
    /// The authoring tool's starting template for a freshly added question.
    fn default() -> Self {
        Self {
            text: String::new(),
            score_value: 10,
            score_type: ScoreType::Full,
            answer_type: AnswerType::YesPartialNo,
        }
    }
}

/// Merge patch for a group; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPatch {
    pub name: Option<String>,
}

/// Merge patch for a question; unset fields are left unchanged. Structural
/// fields (`group_id`, `number`, `order`) are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub score_value: Option<u32>,
    pub score_type: Option<ScoreType>,
    pub answer_type: Option<AnswerType>,
}

/// One pillar of the ordered catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub group: Group,
    pub questions: Vec<Question>,
}

/// Read-only snapshot of the live catalog, pillars and questions both sorted
/// by their dense `order`. Every consumer that iterates questions does so
/// through this view, so answer processing is deterministic in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    pub pillars: Vec<Pillar>,
}

impl CatalogSnapshot {
    /// All questions in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pillars.iter().flat_map(|pillar| pillar.questions.iter())
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions().find(|question| &question.id == id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.pillars
            .iter()
            .map(|pillar| &pillar.group)
            .find(|group| &group.id == id)
    }

    pub fn total_questions(&self) -> usize {
        self.pillars.iter().map(|pillar| pillar.questions.len()).sum()
    }

    /// Maximum obtainable score over the whole catalog, independent of which
    /// questions a given assessment answered.
    pub fn max_possible_score(&self) -> f64 {
        self.questions()
            .map(|question| f64::from(question.score_value))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_questions() == 0
    }
}
