//! Funding readiness checklist scoring.
//!
//! Ten ordinal answers roll up into four category percentages, each reduced
//! to a band. An ordered rule table over the four bands picks a single
//! profile, and the category percentages average into an overall score. The
//! engine is pure: identical answers always produce identical results. Input
//! validation happens at the boundary through [`AnswerGuard`].

pub mod domain;
mod engine;
pub mod export;
mod guard;
mod guidance;
mod profile;
mod questions;
mod router;
mod rubric;
pub mod scoring;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerLevel, Answers, AssessmentResult, Band, BandSet, Category, CategoryResult,
    InvalidAnswerLevel, Profile, QuestionId,
};
pub use engine::{calculate_results, AssessmentEngine};
pub use export::{ExportDocument, ExportError};
pub use guard::{AnswerGuard, AnswerValidationError, CompletenessPolicy};
pub use guidance::{guidance_for, ProfileGuidance};
pub use profile::{
    assign_profile, select_profile, ProfileDecision, ProfileRule, ProfileRuleId, PROFILE_RULES,
};
pub use questions::{Question, QuestionCatalog, QuestionView};
pub use router::{assessment_router, AssessmentRequest};
pub use rubric::{CategoryDefinition, ScoringRubric};
pub use scoring::{band_from_percent, category_percent, overall_percent};
pub use service::{AssessmentReport, AssessmentService, AssessmentServiceError};
