use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::score::Dimension;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionType {
    /// Agreement strength on a 1–5 scale.
    RatingScale,
    /// Exactly one option from a fixed string list.
    SingleChoice,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::RatingScale => "rating-scale",
            QuestionType::SingleChoice => "single-choice",
        };
        write!(f, "{name}")
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating-scale" => Ok(QuestionType::RatingScale),
            "single-choice" => Ok(QuestionType::SingleChoice),
            other => Err(CoreError::UnknownQuestionType(other.to_string())),
        }
    }
}

/// A single catalog question.
///
/// `category` and `construct` are descriptive tags for the presentation
/// layer. The scoring engine reads only `dimensions`, `correct_answer`, and
/// `reverse_scored`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Present only for single-choice questions.
    pub options: Option<Vec<String>>,
    pub category: String,
    pub construct: String,
    /// The WISCAR dimensions this question feeds. May be empty — such a
    /// question is asked but never scored.
    pub dimensions: Vec<Dimension>,
    /// Canonical answer consulted when a correctness-scored dimension reads
    /// this question.
    pub correct_answer: Option<String>,
    /// Reverse-keyed Likert item: a rating v scores as 6 − v.
    pub reverse_scored: bool,
}

/// One point on the 1–5 agreement scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingOption {
    pub value: u8,
    pub label: String,
}

/// An ordered group of questions shown together.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}
