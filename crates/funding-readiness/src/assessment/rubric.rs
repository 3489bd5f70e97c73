use super::domain::{AnswerLevel, Category, QuestionId};

/// A category and the questions that feed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub category: Category,
    pub question_ids: &'static [QuestionId],
}

/// Immutable partition of checklist questions into categories.
///
/// Every question belongs to exactly one category and every category has at
/// least one question. Scoring is on a fixed scale: each question contributes
/// at most [`ScoringRubric::max_level`] points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRubric {
    categories: [CategoryDefinition; 4],
    max_level: u8,
}

const PROGRAM_PLAN_QUESTIONS: &[QuestionId] = &[1, 2, 3];
const FINANCIAL_QUESTIONS: &[QuestionId] = &[4, 5];
const EVIDENCE_QUESTIONS: &[QuestionId] = &[6, 7];
const RELATIONSHIP_QUESTIONS: &[QuestionId] = &[8, 9, 10];

impl ScoringRubric {
    pub fn standard() -> Self {
        Self {
            categories: [
                CategoryDefinition {
                    category: Category::ProgramPlan,
                    question_ids: PROGRAM_PLAN_QUESTIONS,
                },
                CategoryDefinition {
                    category: Category::Financial,
                    question_ids: FINANCIAL_QUESTIONS,
                },
                CategoryDefinition {
                    category: Category::Evidence,
                    question_ids: EVIDENCE_QUESTIONS,
                },
                CategoryDefinition {
                    category: Category::Relationships,
                    question_ids: RELATIONSHIP_QUESTIONS,
                },
            ],
            max_level: AnswerLevel::MAX,
        }
    }

    /// Category definitions in reporting order.
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn questions_for(&self, category: Category) -> &'static [QuestionId] {
        self.categories
            .iter()
            .find(|definition| definition.category == category)
            .map(|definition| definition.question_ids)
            .unwrap_or(&[])
    }

    pub fn category_of(&self, question: QuestionId) -> Option<Category> {
        self.categories
            .iter()
            .find(|definition| definition.question_ids.contains(&question))
            .map(|definition| definition.category)
    }

    /// All question ids known to the rubric, ascending.
    pub fn question_ids(&self) -> Vec<QuestionId> {
        let mut ids: Vec<QuestionId> = self
            .categories
            .iter()
            .flat_map(|definition| definition.question_ids.iter().copied())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}
