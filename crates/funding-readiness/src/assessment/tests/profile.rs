use crate::assessment::domain::{Band, BandSet, Profile};
use crate::assessment::profile::{assign_profile, select_profile, ProfileRuleId, PROFILE_RULES};

use crate::assessment::domain::Band::{High as H, Low as L, Medium as M};
use crate::assessment::domain::Profile::{
    Builder, Connector, Emerging, FundraisingReady, ReliablePartner, Storyteller, Visionary,
};

fn bands(program_plan: Band, financial: Band, evidence: Band, relationships: Band) -> BandSet {
    BandSet {
        program_plan,
        financial,
        evidence,
        relationships,
    }
}

fn every_band_set() -> Vec<BandSet> {
    let mut sets = Vec::with_capacity(81);
    for program_plan in Band::ALL {
        for financial in Band::ALL {
            for evidence in Band::ALL {
                for relationships in Band::ALL {
                    sets.push(bands(program_plan, financial, evidence, relationships));
                }
            }
        }
    }
    sets
}

/// (ProgramPlan, Financial, Evidence, Relationships) -> expected profile.
#[rustfmt::skip]
const GOLDEN: [(Band, Band, Band, Band, Profile); 81] = [
    (H, H, H, H, FundraisingReady),
    (H, H, H, M, FundraisingReady),
    (H, H, H, L, FundraisingReady),
    (H, H, M, H, FundraisingReady),
    (H, H, M, M, ReliablePartner),
    (H, H, M, L, Visionary),
    (H, H, L, H, FundraisingReady),
    (H, H, L, M, Visionary),
    (H, H, L, L, Emerging),
    (H, M, H, H, FundraisingReady),
    (H, M, H, M, ReliablePartner),
    (H, M, H, L, Visionary),
    (H, M, M, H, ReliablePartner),
    (H, M, M, M, ReliablePartner),
    (H, M, M, L, Visionary),
    (H, M, L, H, Visionary),
    (H, M, L, M, Visionary),
    (H, M, L, L, Emerging),
    (H, L, H, H, FundraisingReady),
    (H, L, H, M, Visionary),
    (H, L, H, L, Emerging),
    (H, L, M, H, Visionary),
    (H, L, M, M, Visionary),
    (H, L, M, L, Emerging),
    (H, L, L, H, Emerging),
    (H, L, L, M, Emerging),
    (H, L, L, L, Emerging),
    (M, H, H, H, FundraisingReady),
    (M, H, H, M, ReliablePartner),
    (M, H, H, L, ReliablePartner),
    (M, H, M, H, ReliablePartner),
    (M, H, M, M, ReliablePartner),
    (M, H, M, L, ReliablePartner),
    (M, H, L, H, Connector),
    (M, H, L, M, ReliablePartner),
    (M, H, L, L, Emerging),
    (M, M, H, H, ReliablePartner),
    (M, M, H, M, ReliablePartner),
    (M, M, H, L, ReliablePartner),
    (M, M, M, H, ReliablePartner),
    (M, M, M, M, ReliablePartner),
    (M, M, M, L, ReliablePartner),
    (M, M, L, H, Connector),
    (M, M, L, M, ReliablePartner),
    (M, M, L, L, Emerging),
    (M, L, H, H, Storyteller),
    (M, L, H, M, Storyteller),
    (M, L, H, L, Emerging),
    (M, L, M, H, ReliablePartner),
    (M, L, M, M, ReliablePartner),
    (M, L, M, L, Emerging),
    (M, L, L, H, Emerging),
    (M, L, L, M, Emerging),
    (M, L, L, L, Emerging),
    (L, H, H, H, FundraisingReady),
    (L, H, H, M, Builder),
    (L, H, H, L, Emerging),
    (L, H, M, H, Builder),
    (L, H, M, M, Builder),
    (L, H, M, L, Emerging),
    (L, H, L, H, Emerging),
    (L, H, L, M, Emerging),
    (L, H, L, L, Emerging),
    (L, M, H, H, ReliablePartner),
    (L, M, H, M, ReliablePartner),
    (L, M, H, L, Emerging),
    (L, M, M, H, ReliablePartner),
    (L, M, M, M, ReliablePartner),
    (L, M, M, L, Emerging),
    (L, M, L, H, Emerging),
    (L, M, L, M, Emerging),
    (L, M, L, L, Emerging),
    (L, L, H, H, Emerging),
    (L, L, H, M, Emerging),
    (L, L, H, L, Emerging),
    (L, L, M, H, Emerging),
    (L, L, M, M, Emerging),
    (L, L, M, L, Emerging),
    (L, L, L, H, Emerging),
    (L, L, L, M, Emerging),
    (L, L, L, L, Emerging),
];

#[test]
fn golden_table_covers_every_band_combination() {
    let mut seen: Vec<BandSet> = GOLDEN
        .iter()
        .map(|(p, f, e, r, _)| bands(*p, *f, *e, *r))
        .collect();
    seen.sort_by_key(|set| format!("{set:?}"));
    seen.dedup();

    assert_eq!(seen.len(), 81);
    assert_eq!(every_band_set().len(), 81);
}

#[test]
fn assign_profile_matches_golden_table() {
    for (program_plan, financial, evidence, relationships, expected) in GOLDEN {
        let set = bands(program_plan, financial, evidence, relationships);
        assert_eq!(assign_profile(&set), expected, "bands {set:?}");
    }
}

#[test]
fn every_combination_resolves_to_a_known_profile() {
    for set in every_band_set() {
        let profile = assign_profile(&set);
        assert!(Profile::ALL.contains(&profile), "bands {set:?}");
    }
}

#[test]
fn earlier_rules_take_precedence() {
    // Three Highs and a Low also satisfy the Visionary guard.
    let decision = select_profile(&bands(H, H, H, L));
    assert_eq!(decision.rule, ProfileRuleId::FundraisingReady);

    // Two Lows with a High program plan also satisfy the Visionary guard.
    let decision = select_profile(&bands(H, L, L, M));
    assert_eq!(decision.rule, ProfileRuleId::Emerging);

    // Storyteller guard also holds.
    assert_eq!(assign_profile(&bands(H, L, H, M)), Visionary);

    // Connector guard also holds.
    assert_eq!(assign_profile(&bands(H, M, L, H)), Visionary);
}

#[test]
fn single_strength_profiles() {
    assert_eq!(assign_profile(&bands(M, L, H, M)), Storyteller);
    assert_eq!(assign_profile(&bands(L, H, M, M)), Builder);
    assert_eq!(assign_profile(&bands(M, M, L, H)), Connector);
    assert_eq!(assign_profile(&bands(H, L, M, M)), Visionary);
}

#[test]
fn all_medium_is_caught_by_its_own_rule() {
    let decision = select_profile(&BandSet::uniform(M));

    assert_eq!(decision.rule, ProfileRuleId::AllMedium);
    assert_eq!(decision.profile, ReliablePartner);
}

#[test]
fn fallback_is_reached_only_by_mixed_band_sets() {
    let fallback: Vec<BandSet> = every_band_set()
        .into_iter()
        .filter(|set| select_profile(set).rule == ProfileRuleId::Fallback)
        .collect();

    assert_eq!(fallback.len(), 22);
    assert!(fallback.contains(&bands(H, H, M, M)));
    assert!(fallback.contains(&bands(L, M, M, M)));
    assert!(fallback.iter().all(|set| set.count(M) < 4));
    assert!(fallback
        .iter()
        .all(|set| assign_profile(set) == ReliablePartner));
}

#[test]
fn rule_table_is_ordered_and_ends_with_fallback() {
    let ids: Vec<ProfileRuleId> = PROFILE_RULES.iter().map(|rule| rule.id).collect();

    assert_eq!(
        ids,
        vec![
            ProfileRuleId::FundraisingReady,
            ProfileRuleId::Emerging,
            ProfileRuleId::Visionary,
            ProfileRuleId::Storyteller,
            ProfileRuleId::Builder,
            ProfileRuleId::Connector,
            ProfileRuleId::AllMedium,
            ProfileRuleId::Fallback,
        ]
    );
    for set in every_band_set() {
        assert!(PROFILE_RULES[PROFILE_RULES.len() - 1].matches(&set));
    }
}

#[test]
fn rule_counts_per_profile() {
    let count = |profile: Profile| {
        every_band_set()
            .iter()
            .filter(|set| assign_profile(set) == profile)
            .count()
    };

    assert_eq!(count(FundraisingReady), 9);
    assert_eq!(count(Emerging), 33);
    assert_eq!(count(Visionary), 9);
    assert_eq!(count(Storyteller), 2);
    assert_eq!(count(Builder), 3);
    assert_eq!(count(Connector), 2);
    assert_eq!(count(ReliablePartner), 23);
}
