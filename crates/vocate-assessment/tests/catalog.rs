use std::collections::HashSet;

use vocate_assessment::catalog;
use vocate_core::models::question::QuestionType;
use vocate_core::models::score::Dimension;

fn ids_feeding(dimension: Dimension) -> Vec<&'static str> {
    catalog::questions()
        .filter(|question| question.dimensions.contains(&dimension))
        .map(|question| question.id.as_str())
        .collect()
}

#[test]
fn four_sections_in_presentation_order() {
    let ids: Vec<&str> = catalog::sections()
        .iter()
        .map(|section| section.id.as_str())
        .collect();
    assert_eq!(ids, ["personality", "aptitude", "scenarios", "learning"]);
}

#[test]
fn twenty_two_questions_with_unique_ids() {
    assert_eq!(catalog::total_questions(), 22);

    let ids: HashSet<&str> = catalog::questions()
        .map(|question| question.id.as_str())
        .collect();
    assert_eq!(ids.len(), 22);
}

#[test]
fn question_lookup_by_id() {
    let question = catalog::question("a3").expect("a3 exists");
    assert_eq!(question.question_type, QuestionType::SingleChoice);
    assert!(catalog::question("a99").is_none());
}

#[test]
fn single_choice_questions_carry_options_and_a_canonical_answer() {
    for question in catalog::questions() {
        match question.question_type {
            QuestionType::SingleChoice => {
                let options = question.options.as_ref().expect("options present");
                assert!(!options.is_empty(), "{} has no options", question.id);
                let correct = question
                    .correct_answer
                    .as_ref()
                    .expect("canonical answer present");
                assert!(
                    options.contains(correct),
                    "{}'s canonical answer is not one of its options",
                    question.id
                );
            }
            QuestionType::RatingScale => {
                assert!(question.options.is_none(), "{} has options", question.id);
                assert!(
                    question.correct_answer.is_none(),
                    "{} has a canonical answer",
                    question.id
                );
            }
        }
    }
}

#[test]
fn dimension_membership_matches_the_scoring_tables() {
    assert_eq!(ids_feeding(Dimension::Will), ["p2", "p6", "s2", "l4"]);
    assert_eq!(ids_feeding(Dimension::Interest), ["p1", "p7", "l3"]);
    assert_eq!(
        ids_feeding(Dimension::Skill),
        ["a2", "a3", "a6", "s1", "s3", "s4", "s5"]
    );
    assert_eq!(ids_feeding(Dimension::Cognitive), ["a1", "a4", "a5"]);
    assert_eq!(ids_feeding(Dimension::Ability), ["l1", "l2", "l5"]);
    assert_eq!(
        ids_feeding(Dimension::RealWorld),
        ["p3", "p4", "p8", "s1", "s2"]
    );
}

#[test]
fn exactly_two_reverse_keyed_items() {
    let reversed: Vec<&str> = catalog::questions()
        .filter(|question| question.reverse_scored)
        .map(|question| question.id.as_str())
        .collect();
    assert_eq!(reversed, ["p4", "l5"]);
}

#[test]
fn p5_is_asked_but_feeds_no_dimension() {
    let question = catalog::question("p5").expect("p5 exists");
    assert!(question.dimensions.is_empty());
}

#[test]
fn rating_scale_has_five_labeled_points() {
    let options = catalog::rating_options();
    let values: Vec<u8> = options.iter().map(|option| option.value).collect();
    assert_eq!(values, [1, 2, 3, 4, 5]);
    assert_eq!(options[0].label, "Strongly Disagree");
    assert_eq!(options[4].label, "Strongly Agree");
}
