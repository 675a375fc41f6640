//! The static question catalog.
//!
//! Four sections, twenty-two questions, fixed for the process lifetime.
//! Scoring metadata (dimension membership, canonical answers, reverse keying)
//! lives on each question, so the engine folds over the catalog instead of
//! keeping parallel id tables.

use std::sync::LazyLock;

use vocate_core::models::question::{Question, QuestionType, RatingOption, Section};
use vocate_core::models::score::Dimension;

/// All sections in presentation order.
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Every question, flattened in catalog order.
pub fn questions() -> impl Iterator<Item = &'static Question> {
    SECTIONS.iter().flat_map(|section| &section.questions)
}

/// Look up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    questions().find(|question| question.id == id)
}

pub fn total_questions() -> usize {
    questions().count()
}

/// The 1–5 agreement scale shown for every rating question.
pub fn rating_options() -> &'static [RatingOption] {
    &RATING_OPTIONS
}

static RATING_OPTIONS: LazyLock<Vec<RatingOption>> = LazyLock::new(|| {
    [
        (1, "Strongly Disagree"),
        (2, "Disagree"),
        (3, "Neutral"),
        (4, "Agree"),
        (5, "Strongly Agree"),
    ]
    .iter()
    .map(|&(value, label)| RatingOption {
        value,
        label: label.to_string(),
    })
    .collect()
});

static SECTIONS: LazyLock<Vec<Section>> = LazyLock::new(|| {
    use Dimension::{Ability, Cognitive, Interest, RealWorld, Skill, Will};

    vec![
        Section {
            id: "personality".to_string(),
            title: "Personality & Motivation".to_string(),
            description: "Understanding your personality traits and what drives you".to_string(),
            questions: vec![
                likert(
                    "p1",
                    "I enjoy persuading people to see things from my perspective",
                    "personality",
                    "extraversion",
                    &[Interest],
                ),
                likert(
                    "p2",
                    "I get energized by achieving challenging targets",
                    "motivation",
                    "achievement",
                    &[Will],
                ),
                likert(
                    "p3",
                    "I feel comfortable approaching strangers to start conversations",
                    "personality",
                    "extraversion",
                    &[RealWorld],
                ),
                likert_reversed(
                    "p4",
                    "I prefer working independently rather than in teams",
                    "personality",
                    "collaboration",
                    &[RealWorld],
                ),
                // Asked for the profile narrative only; feeds no dimension.
                likert(
                    "p5",
                    "I'm motivated more by personal achievement than external rewards",
                    "motivation",
                    "intrinsic",
                    &[],
                ),
                likert(
                    "p6",
                    "I bounce back quickly from rejection or failure",
                    "resilience",
                    "grit",
                    &[Will],
                ),
                likert(
                    "p7",
                    "I enjoy analyzing customer needs and finding solutions",
                    "interest",
                    "problem-solving",
                    &[Interest],
                ),
                likert(
                    "p8",
                    "I'm comfortable with uncertainty and changing priorities",
                    "personality",
                    "adaptability",
                    &[RealWorld],
                ),
            ],
        },
        Section {
            id: "aptitude".to_string(),
            title: "Cognitive & Technical Readiness".to_string(),
            description: "Evaluating your logical reasoning and technical foundations".to_string(),
            questions: vec![
                choice(
                    "a1",
                    "If a product costs $100 and you offer a 15% discount, what's the final price?",
                    ["$85", "$90", "$95", "$115"],
                    0,
                    "numerical",
                    "arithmetic",
                    &[Cognitive],
                ),
                choice(
                    "a2",
                    "What does CRM stand for in business?",
                    [
                        "Customer Relationship Management",
                        "Customer Resource Manager",
                        "Client Retention Method",
                        "Corporate Revenue Model",
                    ],
                    0,
                    "domain-knowledge",
                    "sales-basics",
                    &[Skill],
                ),
                choice(
                    "a3",
                    "A sales funnel typically moves prospects through which sequence?",
                    [
                        "Awareness → Interest → Decision → Action",
                        "Action → Decision → Interest → Awareness",
                        "Interest → Awareness → Action → Decision",
                        "Decision → Awareness → Interest → Action",
                    ],
                    0,
                    "domain-knowledge",
                    "sales-process",
                    &[Skill],
                ),
                choice(
                    "a4",
                    "If your monthly target is $50,000 and you've achieved $35,000, what percentage of your target have you reached?",
                    ["60%", "65%", "70%", "75%"],
                    2,
                    "numerical",
                    "percentages",
                    &[Cognitive],
                ),
                choice(
                    "a5",
                    "Which pattern comes next in this sequence: 2, 6, 18, 54, ?",
                    ["108", "162", "216", "324"],
                    1,
                    "logical",
                    "pattern-recognition",
                    &[Cognitive],
                ),
                choice(
                    "a6",
                    "In B2B sales, what does 'lead qualification' primarily involve?",
                    [
                        "Determining if a prospect has budget, authority, need, and timeline",
                        "Getting contact information",
                        "Setting up meetings",
                        "Closing deals quickly",
                    ],
                    0,
                    "domain-knowledge",
                    "sales-process",
                    &[Skill],
                ),
            ],
        },
        Section {
            id: "scenarios".to_string(),
            title: "Real-World Scenarios".to_string(),
            description: "How you handle typical sales situations and challenges".to_string(),
            questions: vec![
                choice(
                    "s1",
                    "A potential customer says 'Your price is too high.' What's your best response?",
                    [
                        "Immediately offer a discount to close the deal",
                        "Ask what they're comparing it to and understand their budget constraints",
                        "Explain that quality costs more",
                        "Walk away from the deal",
                    ],
                    1,
                    "scenario",
                    "objection-handling",
                    &[Skill, RealWorld],
                ),
                choice(
                    "s2",
                    "You're 20% behind your quarterly target with one month left. What do you do?",
                    [
                        "Focus only on the biggest potential deals",
                        "Analyze your pipeline, accelerate warm leads, and increase activity levels",
                        "Ask your manager to lower the target",
                        "Start looking for a new job",
                    ],
                    1,
                    "scenario",
                    "problem-solving",
                    &[Will, RealWorld],
                ),
                choice(
                    "s3",
                    "A prospect has gone silent after showing initial interest. What's your approach?",
                    [
                        "Call them every day until they respond",
                        "Send a thoughtful follow-up with additional value and set a timeline for next steps",
                        "Assume they're not interested and move on",
                        "Contact their manager directly",
                    ],
                    1,
                    "scenario",
                    "persistence",
                    &[Skill],
                ),
                choice(
                    "s4",
                    "You discover a competitor is also pitching to your prospect. How do you respond?",
                    [
                        "Immediately cut your price to beat the competition",
                        "Focus on understanding unique value you provide and differentiating your solution",
                        "Badmouth the competitor",
                        "Give up and focus on other prospects",
                    ],
                    1,
                    "scenario",
                    "competitive-strategy",
                    &[Skill],
                ),
                choice(
                    "s5",
                    "A customer wants features your product doesn't have. What do you do?",
                    [
                        "Promise the features will be added soon",
                        "Be honest about limitations while highlighting strengths and exploring workarounds",
                        "Suggest they buy a competitor's product",
                        "Ignore the request and focus on other features",
                    ],
                    1,
                    "scenario",
                    "honesty-transparency",
                    &[Skill],
                ),
            ],
        },
        Section {
            id: "learning".to_string(),
            title: "Growth Mindset & Learning".to_string(),
            description: "Your approach to learning, feedback, and personal development".to_string(),
            questions: vec![
                choice(
                    "l1",
                    "When I receive critical feedback, I typically:",
                    [
                        "Feel defensive and try to justify my actions",
                        "Listen carefully and look for ways to improve",
                        "Ignore it if I disagree",
                        "Get discouraged and doubt my abilities",
                    ],
                    1,
                    "mindset",
                    "growth-mindset",
                    &[Ability],
                ),
                choice(
                    "l2",
                    "I believe that sales ability is:",
                    [
                        "A natural talent that you're born with",
                        "A skill that can be developed through practice and learning",
                        "Mostly about being lucky",
                        "Something that doesn't really matter",
                    ],
                    1,
                    "mindset",
                    "growth-mindset",
                    &[Ability],
                ),
                likert(
                    "l3",
                    "When facing a new challenge, I:",
                    "mindset",
                    "challenge-approach",
                    &[Interest],
                ),
                likert(
                    "l4",
                    "I actively seek out learning opportunities to improve my skills",
                    "learning",
                    "continuous-improvement",
                    &[Will],
                ),
                likert_reversed(
                    "l5",
                    "I prefer tasks that I can already do well over tasks that challenge me",
                    "mindset",
                    "challenge-preference",
                    &[Ability],
                ),
            ],
        },
    ]
});

fn likert(
    id: &str,
    text: &str,
    category: &str,
    construct: &str,
    dimensions: &[Dimension],
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::RatingScale,
        options: None,
        category: category.to_string(),
        construct: construct.to_string(),
        dimensions: dimensions.to_vec(),
        correct_answer: None,
        reverse_scored: false,
    }
}

fn likert_reversed(
    id: &str,
    text: &str,
    category: &str,
    construct: &str,
    dimensions: &[Dimension],
) -> Question {
    Question {
        reverse_scored: true,
        ..likert(id, text, category, construct, dimensions)
    }
}

fn choice(
    id: &str,
    text: &str,
    options: [&str; 4],
    correct: usize,
    category: &str,
    construct: &str,
    dimensions: &[Dimension],
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        question_type: QuestionType::SingleChoice,
        correct_answer: Some(options[correct].to_string()),
        options: Some(options.iter().map(|option| option.to_string()).collect()),
        category: category.to_string(),
        construct: construct.to_string(),
        dimensions: dimensions.to_vec(),
        reverse_scored: false,
    }
}
