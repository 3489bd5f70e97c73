use super::domain::{Answers, AssessmentResult, BandSet, Category, CategoryResult};
use super::profile::{select_profile, ProfileDecision};
use super::rubric::ScoringRubric;
use super::scoring::{
    band_from_percent, category_percent_on_scale, overall_percent, round_one_decimal,
};

/// Stateless evaluator that applies the rubric to a set of answers.
///
/// Input is assumed to be validated (see [`super::AnswerGuard`]); unknown
/// question ids are ignored and missing ones score zero.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    rubric: ScoringRubric,
}

impl AssessmentEngine {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    pub fn evaluate(&self, answers: &Answers) -> AssessmentResult {
        self.evaluate_with_trace(answers).0
    }

    /// Same as [`evaluate`](Self::evaluate) but also reports the profile rule
    /// that fired.
    pub fn evaluate_with_trace(&self, answers: &Answers) -> (AssessmentResult, ProfileDecision) {
        let max_level = self.rubric.max_level();
        let raw: Vec<(Category, f64)> = self
            .rubric
            .categories()
            .iter()
            .map(|definition| {
                let percent =
                    category_percent_on_scale(answers, definition.question_ids, max_level);
                (definition.category, percent)
            })
            .collect();

        let categories: Vec<CategoryResult> = raw
            .iter()
            .map(|(category, percent)| CategoryResult {
                category: *category,
                percent: round_one_decimal(*percent),
                band: band_from_percent(*percent),
            })
            .collect();

        let band_of = |category: Category| {
            raw.iter()
                .find(|(candidate, _)| *candidate == category)
                .map_or(band_from_percent(0.0), |(_, percent)| {
                    band_from_percent(*percent)
                })
        };
        let bands = BandSet {
            program_plan: band_of(Category::ProgramPlan),
            financial: band_of(Category::Financial),
            evidence: band_of(Category::Evidence),
            relationships: band_of(Category::Relationships),
        };

        let decision = select_profile(&bands);
        let unrounded: Vec<f64> = raw.iter().map(|(_, percent)| *percent).collect();

        let result = AssessmentResult {
            categories,
            profile: decision.profile,
            overall_percent: overall_percent(&unrounded),
        };

        (result, decision)
    }
}

/// Evaluates answers against the standard rubric.
pub fn calculate_results(answers: &Answers) -> AssessmentResult {
    AssessmentEngine::default().evaluate(answers)
}
