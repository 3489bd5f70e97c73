use serde::{Deserialize, Serialize};

use super::domain::{Band, BandSet, Profile};

/// Identifies which entry of the ordered rule table produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRuleId {
    FundraisingReady,
    Emerging,
    Visionary,
    Storyteller,
    Builder,
    Connector,
    AllMedium,
    Fallback,
}

/// Guard/label pair. Rules are evaluated in table order and the first match
/// wins.
pub struct ProfileRule {
    pub id: ProfileRuleId,
    pub profile: Profile,
    pub description: &'static str,
    matches: fn(&BandSet) -> bool,
}

impl ProfileRule {
    pub fn matches(&self, bands: &BandSet) -> bool {
        (self.matches)(bands)
    }
}

impl std::fmt::Debug for ProfileRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRule")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Outcome of profile selection along with the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDecision {
    pub rule: ProfileRuleId,
    pub profile: Profile,
}

pub static PROFILE_RULES: [ProfileRule; 8] = [
    ProfileRule {
        id: ProfileRuleId::FundraisingReady,
        profile: Profile::FundraisingReady,
        description: "High in at least three categories",
        matches: |bands| bands.count(Band::High) >= 3,
    },
    ProfileRule {
        id: ProfileRuleId::Emerging,
        profile: Profile::Emerging,
        description: "Low in at least two categories",
        matches: |bands| bands.count(Band::Low) >= 2,
    },
    ProfileRule {
        id: ProfileRuleId::Visionary,
        profile: Profile::Visionary,
        description: "High program plan with any other category Low",
        matches: |bands| {
            bands.program_plan == Band::High
                && (bands.financial == Band::Low
                    || bands.evidence == Band::Low
                    || bands.relationships == Band::Low)
        },
    },
    ProfileRule {
        id: ProfileRuleId::Storyteller,
        profile: Profile::Storyteller,
        description: "High evidence with Low financial readiness",
        matches: |bands| bands.evidence == Band::High && bands.financial == Band::Low,
    },
    ProfileRule {
        id: ProfileRuleId::Builder,
        profile: Profile::Builder,
        description: "High financial readiness with Low program plan",
        matches: |bands| bands.financial == Band::High && bands.program_plan == Band::Low,
    },
    ProfileRule {
        id: ProfileRuleId::Connector,
        profile: Profile::Connector,
        description: "High relationships with Low evidence",
        matches: |bands| bands.relationships == Band::High && bands.evidence == Band::Low,
    },
    ProfileRule {
        id: ProfileRuleId::AllMedium,
        profile: Profile::ReliablePartner,
        description: "Medium in every category",
        matches: |bands| bands.count(Band::Medium) == 4,
    },
    ProfileRule {
        id: ProfileRuleId::Fallback,
        profile: Profile::ReliablePartner,
        description: "No earlier rule matched",
        matches: |_| true,
    },
];

/// Walks [`PROFILE_RULES`] and reports the first rule whose guard holds.
pub fn select_profile(bands: &BandSet) -> ProfileDecision {
    let rule = PROFILE_RULES
        .iter()
        .find(|rule| rule.matches(bands))
        .unwrap_or(&PROFILE_RULES[PROFILE_RULES.len() - 1]);

    ProfileDecision {
        rule: rule.id,
        profile: rule.profile,
    }
}

pub fn assign_profile(bands: &BandSet) -> Profile {
    select_profile(bands).profile
}
