use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An integer rating for rating-scale questions, or the chosen option string
/// for single-choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseValue {
    Rating(u8),
    Choice(String),
}

impl From<u8> for ResponseValue {
    fn from(value: u8) -> Self {
        ResponseValue::Rating(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Choice(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Choice(value)
    }
}

/// A recorded answer. At most one live response per question id; recording
/// again for the same question supersedes the old value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: ResponseValue,
    pub timestamp: Timestamp,
}
