use thiserror::Error;

use vocate_core::models::question::QuestionType;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("no assessment in progress")]
    NotInProgress,

    #[error("question '{question_id}' takes a rating between 1 and 5, got {value}")]
    RatingOutOfRange { question_id: String, value: u8 },

    #[error("'{choice}' is not an option for question '{question_id}'")]
    UnknownOption { question_id: String, choice: String },

    #[error("question '{question_id}' expects a {expected} answer")]
    WrongValueKind {
        question_id: String,
        expected: QuestionType,
    },
}
