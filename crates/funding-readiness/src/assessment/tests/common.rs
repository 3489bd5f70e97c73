use std::collections::BTreeMap;

use crate::assessment::domain::{AnswerLevel, Answers, QuestionId};

pub(super) fn level(value: u8) -> AnswerLevel {
    AnswerLevel::new(value).expect("level within 1..=4")
}

pub(super) fn answers(pairs: &[(QuestionId, u8)]) -> Answers {
    pairs.iter().map(|(id, value)| (*id, level(*value))).collect()
}

pub(super) fn uniform(value: u8) -> Answers {
    Answers::uniform(level(value))
}

/// Per-question levels for ids 1..=10 in order.
pub(super) fn sheet(levels: [u8; 10]) -> Answers {
    levels
        .iter()
        .enumerate()
        .map(|(index, value)| (index as QuestionId + 1, level(*value)))
        .collect()
}

pub(super) fn raw(pairs: &[(u32, i64)]) -> BTreeMap<u32, i64> {
    pairs.iter().copied().collect()
}

pub(super) fn raw_uniform(value: i64) -> BTreeMap<u32, i64> {
    (1..=10).map(|id| (id, value)).collect()
}
