//! Answer reconciliation.
//!
//! Keeps the answered list consistent as answers are given or revised: a
//! re-answer replaces the earlier entry in place, a first answer is appended.
//! "The same question" means a structurally equal question snapshot. If a
//! question is edited between two answers, the second answer is appended as a
//! separate entry.

use crate::model::{AnswerToQuestion, Question};

/// Position of the entry whose question snapshot equals `question`.
pub fn position_of(answered: &[AnswerToQuestion], question: &Question) -> Option<usize> {
    answered.iter().position(|entry| entry.question == *question)
}

/// Return a new answered list with `answer` upserted.
///
/// `answered` is left untouched.
pub fn upsert_answer(answered: &[AnswerToQuestion], answer: AnswerToQuestion) -> Vec<AnswerToQuestion> {
    let mut updated = answered.to_vec();

    match position_of(answered, &answer.question) {
        Some(index) => {
            tracing::debug!(
                question_id = answer.question.id,
                index,
                "replacing answer to previously answered question"
            );
            updated[index] = answer;
        }
        None => {
            tracing::debug!(
                question_id = answer.question.id,
                index = updated.len(),
                "appending first answer to question"
            );
            updated.push(answer);
        }
    }

    updated
}
