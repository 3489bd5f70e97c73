use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Answers, AssessmentResult};
use super::engine::AssessmentEngine;
use super::guard::{AnswerGuard, AnswerValidationError, CompletenessPolicy};
use super::guidance::{guidance_for, ProfileGuidance};
use super::profile::ProfileRuleId;

/// Service composing the answer guard, scoring engine, and profile copy.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    guard: AnswerGuard,
    engine: AssessmentEngine,
}

/// Result plus the presentation extras served alongside it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub guidance: ProfileGuidance,
    pub answered: usize,
    #[serde(skip)]
    pub rule: ProfileRuleId,
}

impl AssessmentService {
    pub fn new(policy: CompletenessPolicy) -> Self {
        Self::with_parts(AnswerGuard::new(policy), AssessmentEngine::default())
    }

    pub fn with_parts(guard: AnswerGuard, engine: AssessmentEngine) -> Self {
        Self { guard, engine }
    }

    pub fn policy(&self) -> CompletenessPolicy {
        self.guard.policy()
    }

    /// Validate raw caller input and score it.
    pub fn assess(
        &self,
        raw: &BTreeMap<u32, i64>,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let answers = self.guard.validate(raw)?;
        Ok(self.assess_answers(&answers))
    }

    /// Score answers that are already typed. The completeness policy is not
    /// applied here.
    pub fn assess_answers(&self, answers: &Answers) -> AssessmentReport {
        let (result, decision) = self.engine.evaluate_with_trace(answers);
        AssessmentReport {
            guidance: guidance_for(result.profile),
            answered: answers.len(),
            rule: decision.rule,
            result,
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] AnswerValidationError),
}
