use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The six WISCAR dimensions: Will, Interest, Skill, Cognitive ability,
/// Ability to learn, Real-world fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    /// Fixed catalog order. Ranking ties between equal scores resolve in
    /// this order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Will,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Cognitive,
        Dimension::Ability,
        Dimension::RealWorld,
    ];

    /// How this dimension reads its contributing questions.
    pub fn scoring_mode(self) -> ScoringMode {
        match self {
            Dimension::Skill | Dimension::Cognitive => ScoringMode::Correctness,
            _ => ScoringMode::Likert,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Will => "will",
            Dimension::Interest => "interest",
            Dimension::Skill => "skill",
            Dimension::Cognitive => "cognitive",
            Dimension::Ability => "ability",
            Dimension::RealWorld => "realWorld",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "will" => Ok(Dimension::Will),
            "interest" => Ok(Dimension::Interest),
            "skill" => Ok(Dimension::Skill),
            "cognitive" => Ok(Dimension::Cognitive),
            "ability" => Ok(Dimension::Ability),
            "realWorld" => Ok(Dimension::RealWorld),
            other => Err(CoreError::UnknownDimension(other.to_string())),
        }
    }
}

/// How a dimension scores the questions that feed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMode {
    /// 1–5 agreement rating scaled linearly to 0–100.
    Likert,
    /// 100 for the canonical answer, 0 for anything else.
    Correctness,
}

/// Per-dimension scores, each 0–100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreBreakdown {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }
}

/// The categorical verdict on sales-career readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Recommendation::Yes => "Yes",
            Recommendation::Maybe => "Maybe",
            Recommendation::No => "No",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Recommendation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Recommendation::Yes),
            "Maybe" => Ok(Recommendation::Maybe),
            "No" => Ok(Recommendation::No),
            other => Err(CoreError::UnknownRecommendation(other.to_string())),
        }
    }
}
