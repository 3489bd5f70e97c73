use super::common::*;
use crate::assessment::domain::{AnswerLevel, Category, Profile};
use crate::assessment::guidance::guidance_for;
use crate::assessment::questions::QuestionCatalog;
use crate::assessment::rubric::ScoringRubric;

#[test]
fn rubric_partitions_every_question_exactly_once() {
    let rubric = ScoringRubric::standard();

    assert_eq!(rubric.question_ids(), (1..=10).collect::<Vec<u8>>());
    assert_eq!(rubric.questions_for(Category::ProgramPlan), &[1, 2, 3]);
    assert_eq!(rubric.questions_for(Category::Financial), &[4, 5]);
    assert_eq!(rubric.questions_for(Category::Evidence), &[6, 7]);
    assert_eq!(rubric.questions_for(Category::Relationships), &[8, 9, 10]);
    assert_eq!(rubric.category_of(7), Some(Category::Evidence));
    assert_eq!(rubric.category_of(11), None);
    assert_eq!(rubric.max_level(), AnswerLevel::MAX);
}

#[test]
fn catalog_questions_follow_the_rubric() {
    let catalog = QuestionCatalog::standard();

    assert_eq!(catalog.questions().len(), 10);
    let financial: Vec<u8> = catalog
        .questions_for(Category::Financial)
        .iter()
        .map(|question| question.id)
        .collect();
    assert_eq!(financial, vec![4, 5]);

    let question = catalog.question(6).expect("question 6 present");
    assert_eq!(
        question.option(level(4)),
        "We have comprehensive M&E systems with quality controls"
    );
    assert!(catalog.question(0).is_none());
}

#[test]
fn answer_levels_are_bounded() {
    assert!(AnswerLevel::new(0).is_none());
    assert!(AnswerLevel::new(5).is_none());
    assert_eq!(AnswerLevel::try_from(3u8).map(u8::from), Ok(3));
    assert!(serde_json::from_str::<AnswerLevel>("5").is_err());
    assert_eq!(
        serde_json::from_str::<AnswerLevel>("2").expect("valid level"),
        level(2)
    );
}

#[test]
fn every_profile_has_guidance() {
    for profile in Profile::ALL {
        let guidance = guidance_for(profile);
        assert_eq!(guidance.profile, profile);
        assert!(!guidance.tagline.is_empty());
        assert!(!guidance.next_step.is_empty());
        assert!(!guidance.funder_perspective.is_empty());
        assert_eq!(guidance.details.len(), 4);
        assert!(guidance.detailed_feedback.contains("\n\n"));
    }
}

#[test]
fn guidance_details_follow_category_order() {
    let guidance = guidance_for(Profile::Storyteller);
    let prefixes: Vec<&str> = guidance
        .details
        .iter()
        .filter_map(|line| line.split(':').next())
        .collect();
    assert_eq!(
        prefixes,
        vec![
            "Clear Program Plan",
            "Evidence & Data",
            "Financial Readiness",
            "Relationships"
        ]
    );
}

#[test]
fn only_visionary_lists_resources() {
    for profile in Profile::ALL {
        let guidance = guidance_for(profile);
        if profile == Profile::Visionary {
            assert_eq!(guidance.resources.len(), 4);
            assert!(guidance.resources[1].contains("theoryofchange.org"));
        } else {
            assert!(guidance.resources.is_empty());
        }
    }
}

#[test]
fn guidance_serializes_long_form_copy() {
    let json = serde_json::to_value(guidance_for(Profile::Visionary)).expect("serializes");
    assert_eq!(json["details"].as_array().map(Vec::len), Some(4));
    assert!(json["detailedFeedback"]
        .as_str()
        .is_some_and(|text| text.starts_with("Your program shines when it comes to planning.")));
    assert_eq!(json["resources"].as_array().map(Vec::len), Some(4));

    let json = serde_json::to_value(guidance_for(Profile::Builder)).expect("serializes");
    assert!(json.get("resources").is_none());
}

#[test]
fn profiles_parse_from_labels_and_slugs() {
    assert_eq!(
        Profile::from_label("Fundraising Ready"),
        Some(Profile::FundraisingReady)
    );
    assert_eq!(
        Profile::from_label("reliable_partner"),
        Some(Profile::ReliablePartner)
    );
    assert_eq!(Profile::from_label(" visionary "), Some(Profile::Visionary));
    assert_eq!(Profile::from_label("wizard"), None);
}
