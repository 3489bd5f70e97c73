use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Checklist question identifier (1..=10 for the standard rubric).
pub type QuestionId = u8;

/// Ordinal answer to a single checklist question, constrained to 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerLevel(u8);

impl AnswerLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnswerLevel {
    type Error = InvalidAnswerLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidAnswerLevel(value))
    }
}

impl From<AnswerLevel> for u8 {
    fn from(level: AnswerLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer level {0} is outside 1..=4")]
pub struct InvalidAnswerLevel(pub u8);

/// Answers keyed by question id. Partial maps are allowed; missing questions
/// score zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, AnswerLevel>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every standard question answered at the same level.
    pub fn uniform(level: AnswerLevel) -> Self {
        (1..=10).map(|id| (id, level)).collect()
    }

    pub fn insert(&mut self, question: QuestionId, level: AnswerLevel) -> Option<AnswerLevel> {
        self.0.insert(question, level)
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerLevel> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerLevel)> + '_ {
        self.0.iter().map(|(id, level)| (*id, *level))
    }
}

impl FromIterator<(QuestionId, AnswerLevel)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerLevel)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The four readiness dimensions, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Clear Program Plan", alias = "ProgramPlan")]
    ProgramPlan,
    #[serde(rename = "Financial Readiness", alias = "Financial")]
    Financial,
    #[serde(rename = "Evidence & Data", alias = "Evidence")]
    Evidence,
    #[serde(rename = "Funding Relationships & Capacity", alias = "Relationships")]
    Relationships,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ProgramPlan,
        Category::Financial,
        Category::Evidence,
        Category::Relationships,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::ProgramPlan => "ProgramPlan",
            Self::Financial => "Financial",
            Self::Evidence => "Evidence",
            Self::Relationships => "Relationships",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProgramPlan => "Clear Program Plan",
            Self::Financial => "Financial Readiness",
            Self::Evidence => "Evidence & Data",
            Self::Relationships => "Funding Relationships & Capacity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative tier for a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::High, Band::Medium, Band::Low];

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bands for all four categories, the sole input to profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BandSet {
    pub program_plan: Band,
    pub financial: Band,
    pub evidence: Band,
    pub relationships: Band,
}

impl BandSet {
    pub const fn uniform(band: Band) -> Self {
        Self {
            program_plan: band,
            financial: band,
            evidence: band,
            relationships: band,
        }
    }

    pub const fn get(&self, category: Category) -> Band {
        match category {
            Category::ProgramPlan => self.program_plan,
            Category::Financial => self.financial,
            Category::Evidence => self.evidence,
            Category::Relationships => self.relationships,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Band> {
        [
            self.program_plan,
            self.financial,
            self.evidence,
            self.relationships,
        ]
        .into_iter()
    }

    pub fn count(&self, band: Band) -> usize {
        self.iter().filter(|candidate| *candidate == band).count()
    }
}

/// Classification label summarizing the four category bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Visionary,
    Storyteller,
    Builder,
    Connector,
    #[serde(rename = "Reliable Partner")]
    ReliablePartner,
    #[serde(rename = "Fundraising Ready")]
    FundraisingReady,
    Emerging,
}

impl Profile {
    pub const ALL: [Profile; 7] = [
        Profile::Visionary,
        Profile::Storyteller,
        Profile::Builder,
        Profile::Connector,
        Profile::ReliablePartner,
        Profile::FundraisingReady,
        Profile::Emerging,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Visionary => "Visionary",
            Self::Storyteller => "Storyteller",
            Self::Builder => "Builder",
            Self::Connector => "Connector",
            Self::ReliablePartner => "Reliable Partner",
            Self::FundraisingReady => "Fundraising Ready",
            Self::Emerging => "Emerging",
        }
    }

    /// Case-insensitive lookup by label; also accepts hyphen/underscore slugs
    /// such as `reliable-partner`.
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL.into_iter().find(|profile| {
            profile
                .label()
                .chars()
                .filter(|ch| *ch != ' ')
                .flat_map(char::to_lowercase)
                .eq(normalized.chars())
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored category: percent is rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    #[serde(rename = "name")]
    pub category: Category,
    pub percent: f64,
    pub band: Band,
}

/// Complete evaluation output. Categories are always in
/// [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub categories: Vec<CategoryResult>,
    pub profile: Profile,
    pub overall_percent: f64,
}

impl AssessmentResult {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories
            .iter()
            .find(|result| result.category == category)
    }

    pub fn bands(&self) -> Option<BandSet> {
        Some(BandSet {
            program_plan: self.category(Category::ProgramPlan)?.band,
            financial: self.category(Category::Financial)?.band,
            evidence: self.category(Category::Evidence)?.band,
            relationships: self.category(Category::Relationships)?.band,
        })
    }
}
