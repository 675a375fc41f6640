use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("unknown recommendation: {0}")]
    UnknownRecommendation(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
}
