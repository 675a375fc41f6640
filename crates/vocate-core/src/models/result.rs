use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::score::{Recommendation, ScoreBreakdown};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareerMatch {
    pub title: String,
    pub fit_score: u8,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub recommendation: Recommendation,
    pub insights: Vec<String>,
    pub next_steps: Vec<String>,
    pub alternatives: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
}
