use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerLevel, Answers, QuestionId};
use super::rubric::ScoringRubric;

/// Validation errors raised before answers reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerValidationError {
    #[error("question {0} is not part of the checklist")]
    UnknownQuestion(u32),
    #[error("answer for question {question} must be between 1 and 4 (found {level})")]
    LevelOutOfRange { question: QuestionId, level: i64 },
    #[error("checklist incomplete, missing answers for questions {missing:?}")]
    Incomplete { missing: Vec<QuestionId> },
}

/// Whether partial submissions are scored or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessPolicy {
    #[default]
    RequireAll,
    AllowPartial,
}

/// Boundary check turning caller-supplied numbers into typed [`Answers`].
#[derive(Debug, Clone)]
pub struct AnswerGuard {
    rubric: ScoringRubric,
    policy: CompletenessPolicy,
}

impl AnswerGuard {
    pub fn new(policy: CompletenessPolicy) -> Self {
        Self::with_rubric(ScoringRubric::standard(), policy)
    }

    pub fn with_rubric(rubric: ScoringRubric, policy: CompletenessPolicy) -> Self {
        Self { rubric, policy }
    }

    pub fn policy(&self) -> CompletenessPolicy {
        self.policy
    }

    pub fn validate(&self, raw: &BTreeMap<u32, i64>) -> Result<Answers, AnswerValidationError> {
        let known = self.rubric.question_ids();
        let mut answers = Answers::new();

        for (&question, &level) in raw {
            let id = QuestionId::try_from(question)
                .ok()
                .filter(|id| known.contains(id))
                .ok_or(AnswerValidationError::UnknownQuestion(question))?;

            let parsed = u8::try_from(level)
                .ok()
                .and_then(AnswerLevel::new)
                .ok_or(AnswerValidationError::LevelOutOfRange {
                    question: id,
                    level,
                })?;

            answers.insert(id, parsed);
        }

        if self.policy == CompletenessPolicy::RequireAll {
            let missing: Vec<QuestionId> = known
                .into_iter()
                .filter(|id| answers.get(*id).is_none())
                .collect();
            if !missing.is_empty() {
                return Err(AnswerValidationError::Incomplete { missing });
            }
        }

        Ok(answers)
    }
}

impl Default for AnswerGuard {
    fn default() -> Self {
        Self::new(CompletenessPolicy::default())
    }
}
