//! Question type changes.
//!
//! Switching a question's type rebuilds the record with only the fields that
//! belong to the new type, so `options` and `correct_answer` never coexist.

use crate::model::{MatchLists, Question, QuestionOption, QuestionOptions, QuestionType, TextAnswer};

/// Return `question` retyped to `new_type`, with its shape-specific fields
/// reset to the defaults of that type. `id` and `topic` are kept.
pub fn with_question_type(question: Question, new_type: QuestionType) -> Question {
    let (options, correct_answer) = match new_type {
        QuestionType::OneChoice | QuestionType::MultipleChoice => {
            (Some(default_choice_options()), None)
        }
        QuestionType::ShortTextField | QuestionType::DetailedTextField => {
            (None, Some(default_correct_answer()))
        }
        QuestionType::Matchmaking => (Some(default_match_lists()), None),
    };

    Question {
        kind: new_type,
        options,
        correct_answer,
        ..question
    }
}

/// A single blank option worth nothing.
pub fn default_choice_options() -> QuestionOptions {
    QuestionOptions::List(vec![QuestionOption::new(1, "").with_score(0.0)])
}

/// An empty reference answer worth nothing.
pub fn default_correct_answer() -> TextAnswer {
    TextAnswer::graded("", 0.0)
}

/// One left entry paired with one right entry, worth a point.
pub fn default_match_lists() -> QuestionOptions {
    QuestionOptions::Matches(MatchLists {
        left_list: vec![QuestionOption::new(1, "").related_to(1).with_score(1.0)],
        right_list: vec![QuestionOption::new(1, "")],
    })
}
