use serde::Serialize;

use super::domain::{AnswerLevel, Category, QuestionId};
use super::rubric::ScoringRubric;

/// A checklist question with its four options, ordered by answer level.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

impl Question {
    pub fn option(&self, level: AnswerLevel) -> &'static str {
        self.options[usize::from(level.value() - AnswerLevel::MIN)]
    }
}

/// Question plus the category it rolls up into, for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub category: Category,
    pub category_key: &'static str,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    rubric: ScoringRubric,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            rubric: ScoringRubric::standard(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| self.rubric.category_of(question.id) == Some(category))
            .collect()
    }

    pub fn views(&self) -> Vec<QuestionView> {
        self.questions
            .iter()
            .filter_map(|question| {
                let category = self.rubric.category_of(question.id)?;
                Some(QuestionView {
                    id: question.id,
                    category,
                    category_key: category.key(),
                    prompt: question.prompt,
                    options: question.options,
                })
            })
            .collect()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "How clear is your program's theory of change or logic model?",
            options: [
                "We're still figuring out how our activities lead to outcomes",
                "We have a rough idea but it's not documented clearly",
                "We have a clear, documented theory that guides our work",
                "Our logic model is sophisticated and regularly updated",
            ],
        },
        Question {
            id: 2,
            prompt: "How well-defined are your program goals and measurable outcomes?",
            options: [
                "Our goals are general and mostly activity-focused",
                "We have some outcome goals but they're not all measurable",
                "We have clear, measurable outcomes with realistic targets",
                "Our outcomes are SMART, regularly reviewed, and aligned with impact",
            ],
        },
        Question {
            id: 3,
            prompt: "How developed is your program planning and strategy?",
            options: [
                "We plan year to year with basic activity lists",
                "We have 2-3 year plans but they're not detailed",
                "We have detailed multi-year plans with clear milestones",
                "We have strategic plans with scenarios, assumptions, and regular updates",
            ],
        },
        Question {
            id: 4,
            prompt: "How comprehensive and accurate are your program budgets?",
            options: [
                "We have basic budgets that cover obvious costs",
                "Our budgets are detailed but miss some indirect costs",
                "We have fully-loaded budgets including all true costs",
                "Our budgets include scenarios, cost-per-outcome metrics, and variance tracking",
            ],
        },
        Question {
            id: 5,
            prompt: "How strong are your financial systems and grant management?",
            options: [
                "We track expenses basically and manage grants manually",
                "We have some systems but they're not fully integrated",
                "We have good financial tracking and grant management systems",
                "We have sophisticated systems with real-time reporting and compliance",
            ],
        },
        Question {
            id: 6,
            prompt: "How robust is your data collection and outcome measurement?",
            options: [
                "We collect basic data but it's not systematic",
                "We have some outcome data but collection is inconsistent",
                "We systematically collect outcome data with clear indicators",
                "We have comprehensive M&E systems with quality controls",
            ],
        },
        Question {
            id: 7,
            prompt: "How compelling are your impact stories and evidence?",
            options: [
                "We have anecdotes but limited systematic evidence",
                "We have some good stories but they're not data-backed",
                "We regularly create compelling stories backed by data",
                "We have sophisticated impact narratives with multiple types of evidence",
            ],
        },
        Question {
            id: 8,
            prompt: "How developed are your relationships with potential funders?",
            options: [
                "We know a few funders but relationships are limited",
                "We have some relationships but they're mostly transactional",
                "We have genuine relationships with several aligned funders",
                "We have a strategic network of funders who trust and support us",
            ],
        },
        Question {
            id: 9,
            prompt: "How strong is your grant writing and proposal development capacity?",
            options: [
                "We write proposals but they're often rushed or basic",
                "We write decent proposals but they could be stronger",
                "We consistently write strong, compelling proposals",
                "We have templates, processes, and a track record of success",
            ],
        },
        Question {
            id: 10,
            prompt: "How well do you steward and communicate with current funders?",
            options: [
                "We send required reports but limited other communication",
                "We communicate regularly but it's mostly one-way updates",
                "We have genuine two-way relationships with regular meaningful contact",
                "We have strategic stewardship systems that deepen partnerships",
            ],
        },
    ]
}
