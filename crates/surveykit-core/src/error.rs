//! Survey error types.
//!
//! Reconciliation and scoring never fail; these errors come from the
//! boundaries where raw input is turned into typed survey data.

use thiserror::Error;

use crate::model::QuestionType;

/// Errors raised when addressing questions or reading untyped input.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// No question lives at the given 1-based id.
    #[error("no question with id {id} (survey has {count} questions)")]
    UnknownQuestion { id: u32, count: usize },

    /// A response was given to a question of an incompatible type.
    #[error("{response} response does not fit {question_type} question {id}")]
    ResponseMismatch {
        id: u32,
        question_type: QuestionType,
        response: &'static str,
    },

    /// A raw answer value matched none of the known answer shapes.
    #[error("answer matches no known shape: {0}")]
    UnclassifiableAnswer(String),

    /// A question type name was not recognised.
    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
}
