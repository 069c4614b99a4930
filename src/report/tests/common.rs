use chrono::{TimeZone, Utc};

use crate::assessments::{Assessment, AssessmentId, RespondentProfile};
use crate::catalog::domain::{
    AnswerType, CatalogSnapshot, Group, GroupId, Pillar, Question, ScoreType,
};
use crate::catalog::QuestionId;
use crate::scoring::{AnswerValue, ScoredAnswer};

pub(super) fn question(
    id: &str,
    group: &GroupId,
    number: &str,
    text: &str,
    score_value: u32,
    score_type: ScoreType,
    order: usize,
) -> Question {
    Question {
        id: QuestionId(id.to_string()),
        group_id: group.clone(),
        number: number.to_string(),
        text: text.to_string(),
        score_value,
        score_type,
        answer_type: AnswerType::YesPartialNo,
        order,
    }
}

/// Two pillars: finance (10 + 20 points) and sales (30 points).
pub(super) fn snapshot() -> CatalogSnapshot {
    let finance = GroupId("g-1".to_string());
    let sales = GroupId("g-2".to_string());
    CatalogSnapshot {
        pillars: vec![
            Pillar {
                group: Group {
                    id: finance.clone(),
                    name: "Gestão Financeira".to_string(),
                    order: 0,
                },
                questions: vec![
                    question(
                        "q-1",
                        &finance,
                        "1.1",
                        "Possui controle de fluxo de caixa?",
                        10,
                        ScoreType::Full,
                        0,
                    ),
                    question(
                        "q-2",
                        &finance,
                        "1.2",
                        "Mistura finanças pessoais e da empresa?",
                        20,
                        ScoreType::None,
                        1,
                    ),
                ],
            },
            Pillar {
                group: Group {
                    id: sales.clone(),
                    name: "Vendas".to_string(),
                    order: 1,
                },
                questions: vec![question(
                    "q-3",
                    &sales,
                    "2.1",
                    "Possui metas de venda documentadas?",
                    30,
                    ScoreType::Full,
                    0,
                )],
            },
        ],
    }
}

pub(super) fn assessment(answers: Vec<ScoredAnswer>) -> Assessment {
    Assessment {
        id: AssessmentId("a-1".to_string()),
        profile: RespondentProfile {
            client_name: "João Silva".to_string(),
            company_name: "Padaria Aurora".to_string(),
            cnpj: "12.345.678/0001-00".to_string(),
            ..RespondentProfile::default()
        },
        created_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
        answers,
    }
}

pub(super) fn scored(id: &str, answer: AnswerValue, score: f64) -> ScoredAnswer {
    ScoredAnswer {
        question_id: QuestionId(id.to_string()),
        answer,
        score,
    }
}
