//! The scoring engine.
//!
//! A total, pure transformation from a response list to an
//! [`AssessmentResult`]. Unknown question ids, unanswered questions,
//! duplicate answers (last write wins), and malformed values never fail;
//! they degrade to zero or no contribution.

use std::collections::HashMap;

use vocate_core::models::question::Question;
use vocate_core::models::response::{Response, ResponseValue};
use vocate_core::models::result::{AssessmentResult, CareerMatch};
use vocate_core::models::score::{Dimension, Recommendation, ScoreBreakdown, ScoringMode};

use crate::catalog;

/// Weights of the overall readiness score. Sum to 1.0.
const OVERALL_WEIGHTS: [(Dimension, f64); 6] = [
    (Dimension::Will, 0.25),
    (Dimension::Interest, 0.15),
    (Dimension::Skill, 0.25),
    (Dimension::Cognitive, 0.15),
    (Dimension::Ability, 0.10),
    (Dimension::RealWorld, 0.10),
];

struct CareerTemplate {
    title: &'static str,
    description: &'static str,
    requirements: [&'static str; 4],
    /// Weights sum to 1.0 per template.
    weights: [(Dimension, f64); 3],
}

const CAREER_TEMPLATES: [CareerTemplate; 4] = [
    CareerTemplate {
        title: "Sales Development Representative",
        description: "Entry-level role focused on prospecting and qualifying leads",
        requirements: [
            "Strong communication",
            "Persistence",
            "Phone/email outreach",
            "CRM proficiency",
        ],
        weights: [
            (Dimension::Will, 0.3),
            (Dimension::Interest, 0.3),
            (Dimension::RealWorld, 0.4),
        ],
    },
    CareerTemplate {
        title: "Account Executive",
        description: "Mid-level role managing full sales cycle from lead to close",
        requirements: [
            "Sales experience",
            "Negotiation skills",
            "Pipeline management",
            "Presentation abilities",
        ],
        weights: [
            (Dimension::Skill, 0.4),
            (Dimension::Cognitive, 0.3),
            (Dimension::Will, 0.3),
        ],
    },
    CareerTemplate {
        title: "Customer Success Manager",
        description: "Focus on customer retention, expansion, and satisfaction",
        requirements: [
            "Relationship building",
            "Problem solving",
            "Customer advocacy",
            "Product knowledge",
        ],
        weights: [
            (Dimension::Interest, 0.4),
            (Dimension::Ability, 0.3),
            (Dimension::RealWorld, 0.3),
        ],
    },
    CareerTemplate {
        title: "Inside Sales Specialist",
        description: "Remote/office-based sales role with structured processes",
        requirements: [
            "Phone sales skills",
            "Data analysis",
            "Process adherence",
            "Technology proficiency",
        ],
        weights: [
            (Dimension::Skill, 0.3),
            (Dimension::Will, 0.3),
            (Dimension::Cognitive, 0.4),
        ],
    },
];

/// Score a full response set. The entry point the presentation layer calls
/// once, when the session reaches its terminal state.
pub fn compute(responses: &[Response]) -> AssessmentResult {
    let breakdown = dimension_scores(responses);
    let overall = overall_score(&breakdown);
    let recommendation = recommend(overall, &breakdown);

    AssessmentResult {
        overall_score: overall,
        recommendation,
        insights: insights(&breakdown),
        next_steps: next_steps(recommendation, &breakdown),
        alternatives: alternatives(&breakdown),
        career_matches: career_matches(&breakdown),
        breakdown,
    }
}

/// Fold the responses over the catalog into the six WISCAR scores.
pub fn dimension_scores(responses: &[Response]) -> ScoreBreakdown {
    let mut latest: HashMap<&str, &ResponseValue> = HashMap::new();
    for response in responses {
        latest.insert(response.question_id.as_str(), &response.value);
    }

    let mut totals = [0.0_f64; 6];
    let mut counts = [0_u32; 6];
    for question in catalog::questions() {
        let Some(&value) = latest.get(question.id.as_str()) else {
            continue;
        };
        for &dimension in &question.dimensions {
            if let Some(points) = contribution(dimension, question, value) {
                totals[dimension as usize] += points;
                counts[dimension as usize] += 1;
            }
        }
    }

    let score = |dimension: Dimension| -> u8 {
        let i = dimension as usize;
        if counts[i] == 0 {
            0
        } else {
            (totals[i] / f64::from(counts[i])).round() as u8
        }
    };

    ScoreBreakdown {
        will: score(Dimension::Will),
        interest: score(Dimension::Interest),
        skill: score(Dimension::Skill),
        cognitive: score(Dimension::Cognitive),
        ability: score(Dimension::Ability),
        real_world: score(Dimension::RealWorld),
    }
}

/// Points a response earns toward one dimension, or None when the value is
/// unreadable under the dimension's mode and must stay out of the average.
fn contribution(dimension: Dimension, question: &Question, value: &ResponseValue) -> Option<f64> {
    match dimension.scoring_mode() {
        ScoringMode::Correctness => {
            let correct = question.correct_answer.as_deref()?;
            match value {
                ResponseValue::Choice(choice) if choice == correct => Some(100.0),
                _ => Some(0.0),
            }
        }
        ScoringMode::Likert => match value {
            ResponseValue::Rating(rating) if (1..=5).contains(rating) => {
                let keyed = if question.reverse_scored {
                    6 - *rating
                } else {
                    *rating
                };
                Some(f64::from(keyed - 1) * 25.0)
            }
            _ => None,
        },
    }
}

/// Convex combination of the six dimension scores.
pub fn overall_score(breakdown: &ScoreBreakdown) -> u8 {
    let weighted: f64 = OVERALL_WEIGHTS
        .iter()
        .map(|&(dimension, weight)| f64::from(breakdown.get(dimension)) * weight)
        .sum();
    weighted.round() as u8
}

/// Threshold the overall score and the gating dimensions, in priority order.
pub fn recommend(overall: u8, breakdown: &ScoreBreakdown) -> Recommendation {
    if overall >= 70 && breakdown.will >= 60 && breakdown.skill >= 60 && breakdown.real_world >= 60
    {
        Recommendation::Yes
    } else if overall >= 50 && (breakdown.will >= 70 || breakdown.interest >= 70) {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

/// Narrative observations: top strength, worst weak area, then the two
/// fixed conditional sentences, each omitted when its condition fails.
pub fn insights(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut insights = Vec::new();

    let mut strengths: Vec<(Dimension, u8)> = Dimension::ALL
        .iter()
        .map(|&dimension| (dimension, breakdown.get(dimension)))
        .filter(|&(_, score)| score >= 70)
        .collect();
    strengths.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(&(dimension, score)) = strengths.first() {
        insights.push(format!(
            "Your strongest area is {} with a score of {score}%.",
            strength_label(dimension)
        ));
    }

    let mut weak_areas: Vec<(Dimension, u8)> = Dimension::ALL
        .iter()
        .map(|&dimension| (dimension, breakdown.get(dimension)))
        .filter(|&(_, score)| score < 60)
        .collect();
    weak_areas.sort_by(|a, b| a.1.cmp(&b.1));
    if let Some(&(dimension, score)) = weak_areas.first() {
        insights.push(format!(
            "Consider developing your {} (current score: {score}%).",
            growth_label(dimension)
        ));
    }

    if breakdown.interest >= 70 && breakdown.real_world >= 60 {
        insights
            .push("You show strong interpersonal alignment and customer-focused thinking.".into());
    }
    if breakdown.ability >= 70 {
        insights.push(
            "Your growth mindset indicates strong potential for rapid skill development.".into(),
        );
    }

    insights
}

/// Advice per recommendation branch, with conditional insertions.
pub fn next_steps(recommendation: Recommendation, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push("Start applying for entry-level sales roles or sales development positions.".into());
            steps.push("Consider sales certification programs (e.g., HubSpot Sales, Salesforce Trailhead).".into());
            if breakdown.skill < 80 {
                steps.push("Practice sales scenarios and role-playing to strengthen your skills.".into());
            }
        }
        Recommendation::Maybe => {
            steps.push("Develop foundational sales skills through online courses or workshops.".into());
            steps.push("Shadow experienced sales professionals or seek mentorship.".into());
            if breakdown.will < 70 {
                steps.push("Explore what specifically motivates you and aligns with sales goals.".into());
            }
            if breakdown.skill < 60 {
                steps.push("Learn CRM systems, sales processes, and communication techniques.".into());
            }
        }
        Recommendation::No => {
            steps.push("Consider exploring related fields that match your strengths better.".into());
            steps.push("Develop core competencies before reconsidering a sales career.".into());
            if breakdown.interest < 50 {
                steps.push("Reflect on whether customer-facing roles align with your interests.".into());
            }
        }
    }

    steps
}

/// Adjacent career labels, appended per satisfied condition. The conditions
/// are not mutually exclusive and the list is not de-duplicated.
pub fn alternatives(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut alternatives: Vec<String> = Vec::new();

    if breakdown.cognitive >= 70 {
        alternatives.extend(["Business Analyst".into(), "Data Analytics".into()]);
    }
    if breakdown.interest >= 60 && breakdown.real_world >= 60 {
        alternatives.extend(["Customer Success Manager".into(), "Account Coordinator".into()]);
    }
    if breakdown.ability >= 70 {
        alternatives.extend(["Training & Development".into(), "Product Specialist".into()]);
    }
    if breakdown.will >= 70 {
        alternatives.extend(["Project Management".into(), "Operations Management".into()]);
    }

    if alternatives.is_empty() {
        vec![
            "Marketing".into(),
            "Customer Support".into(),
            "Business Development".into(),
        ]
    } else {
        alternatives
    }
}

/// Rank the career templates: drop fits below 40, best first, at most four.
pub fn career_matches(breakdown: &ScoreBreakdown) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = CAREER_TEMPLATES
        .iter()
        .map(|template| {
            let fit: f64 = template
                .weights
                .iter()
                .map(|&(dimension, weight)| f64::from(breakdown.get(dimension)) * weight)
                .sum();
            CareerMatch {
                title: template.title.to_string(),
                fit_score: fit.round() as u8,
                description: template.description.to_string(),
                requirements: template
                    .requirements
                    .iter()
                    .map(|requirement| requirement.to_string())
                    .collect(),
            }
        })
        .filter(|career| career.fit_score >= 40)
        .collect();

    matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    matches.truncate(4);
    matches
}

fn strength_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Will => "high motivation and persistence",
        Dimension::Interest => "genuine passion for sales activities",
        Dimension::Skill => "strong existing sales competencies",
        Dimension::Cognitive => "excellent analytical and reasoning abilities",
        Dimension::Ability => "outstanding growth mindset and learning drive",
        Dimension::RealWorld => "excellent practical alignment with sales roles",
    }
}

fn growth_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Will => "motivation and persistence",
        Dimension::Interest => "interest in sales activities",
        Dimension::Skill => "sales-specific skills and knowledge",
        Dimension::Cognitive => "analytical and reasoning abilities",
        Dimension::Ability => "growth mindset and learning approach",
        Dimension::RealWorld => "practical readiness for sales environments",
    }
}
