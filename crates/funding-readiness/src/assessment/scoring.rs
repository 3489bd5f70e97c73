use super::domain::{AnswerLevel, Answers, Band, QuestionId};

/// Lower bound (inclusive) of the High band.
pub const HIGH_THRESHOLD: f64 = 75.0;
/// Lower bound (inclusive) of the Medium band.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Percentage of the maximum attainable score for one category.
///
/// Missing answers contribute zero. The result is not rounded; callers round
/// once at the output boundary with [`round_one_decimal`].
pub fn category_percent(answers: &Answers, question_ids: &[QuestionId]) -> f64 {
    category_percent_on_scale(answers, question_ids, AnswerLevel::MAX)
}

pub(crate) fn category_percent_on_scale(
    answers: &Answers,
    question_ids: &[QuestionId],
    max_level: u8,
) -> f64 {
    if question_ids.is_empty() || max_level == 0 {
        return 0.0;
    }

    let sum: u32 = question_ids
        .iter()
        .map(|id| answers.get(*id).map_or(0, |level| u32::from(level.value())))
        .sum();
    let max = u32::from(max_level) * question_ids.len() as u32;

    f64::from(sum) / f64::from(max) * 100.0
}

pub fn band_from_percent(percent: f64) -> Band {
    if percent >= HIGH_THRESHOLD {
        Band::High
    } else if percent >= MEDIUM_THRESHOLD {
        Band::Medium
    } else {
        Band::Low
    }
}

/// Unweighted mean over categories, rounded once to one decimal.
pub fn overall_percent(category_percents: &[f64]) -> f64 {
    if category_percents.is_empty() {
        return 0.0;
    }

    let total: f64 = category_percents.iter().sum();
    round_one_decimal(total / category_percents.len() as f64)
}

/// Rounds half away from zero; percentages are never negative.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
