//! Score aggregation and text-answer grading.
//!
//! Every answer shape contributes the scores it carries; a missing score
//! counts as zero. Matchmaking answers count their left list only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{classify, AnswerKind};
use crate::model::{Answer, AnswerToQuestion, Question, QuestionOption, TextAnswer};

fn sum_scores(options: &[QuestionOption]) -> f64 {
    options
        .iter()
        .fold(0.0, |total, option| total + option.score.unwrap_or(0.0))
}

/// Score contributed by a single answer.
pub fn answer_score(answer: &Answer) -> f64 {
    match answer {
        Answer::Choice(option) => option.score.unwrap_or(0.0),
        Answer::Text(text) => text.score.unwrap_or(0.0),
        Answer::Matches(lists) => sum_scores(&lists.left_list),
        Answer::OptionSet(options) => sum_scores(options),
    }
}

/// Total score of an answered list.
pub fn compute_score(answered: &[AnswerToQuestion]) -> f64 {
    answered
        .iter()
        .fold(0.0, |total, entry| total + answer_score(&entry.answer))
}

fn raw_score(value: &Value) -> f64 {
    value.get("score").and_then(Value::as_f64).unwrap_or(0.0)
}

fn sum_raw_scores(entries: Option<&Vec<Value>>) -> f64 {
    entries
        .map(|entries| entries.iter().fold(0.0, |total, entry| total + raw_score(entry)))
        .unwrap_or(0.0)
}

/// Score contributed by a raw untagged answer, or `None` if it has no known shape.
///
/// Only the `score` fields are read; other fields may be missing or malformed.
pub fn raw_answer_score(raw: &Value) -> Option<f64> {
    let score = match classify(raw)? {
        AnswerKind::Choice | AnswerKind::Text => raw_score(raw),
        AnswerKind::Matches => sum_raw_scores(raw.get("leftList").and_then(Value::as_array)),
        AnswerKind::OptionSet => sum_raw_scores(raw.as_array()),
    };
    Some(score)
}

/// Total score of raw answered-list entries (`{ question, answer }` objects).
///
/// Entries whose answer matches no known shape contribute nothing and are
/// logged; aggregation always runs to the end.
pub fn compute_score_untyped(entries: &[Value]) -> f64 {
    let mut total = 0.0;

    for (index, entry) in entries.iter().enumerate() {
        let Some(raw) = entry.get("answer") else {
            tracing::warn!(index, "skipping answered entry without an answer");
            continue;
        };
        match raw_answer_score(raw) {
            Some(score) => total += score,
            None => tracing::warn!(index, "skipping answer of unknown shape: {raw}"),
        }
    }

    total
}

/// One line of a score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerScore {
    pub question_id: u32,
    pub topic: String,
    pub kind: AnswerKind,
    /// Score this answer contributed to the total.
    pub score: f64,
    /// Whether any score was present on the counted parts of the answer.
    pub graded: bool,
}

fn is_graded(answer: &Answer) -> bool {
    match answer {
        Answer::Choice(option) => option.score.is_some(),
        Answer::Text(text) => text.score.is_some(),
        Answer::Matches(lists) => lists.left_list.iter().any(|o| o.score.is_some()),
        Answer::OptionSet(options) => options.iter().any(|o| o.score.is_some()),
    }
}

/// Per-answer scores in answer order.
pub fn score_breakdown(answered: &[AnswerToQuestion]) -> Vec<AnswerScore> {
    answered
        .iter()
        .map(|entry| AnswerScore {
            question_id: entry.question.id,
            topic: entry.question.topic.clone(),
            kind: entry.answer.kind(),
            score: answer_score(&entry.answer),
            graded: is_graded(&entry.answer),
        })
        .collect()
}

/// Grade free text against a question's reference answer.
///
/// The comparison is an exact match of the lower-cased strings. Without a
/// reference answer the result carries no score at all, which marks it as
/// ungraded rather than wrong.
pub fn grade_text_answer(question: &Question, text: &str) -> TextAnswer {
    match &question.correct_answer {
        Some(correct) => {
            let score = if correct.text.to_lowercase() == text.to_lowercase() {
                correct.score.unwrap_or(0.0)
            } else {
                0.0
            };
            TextAnswer::graded(text, score)
        }
        None => TextAnswer::ungraded(text),
    }
}

/// Outcome of a graded text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Correct,
    Incorrect,
    Ungraded,
}

impl TextAnswer {
    /// `Correct` for a positive score, `Incorrect` for zero or less.
    pub fn grade(&self) -> Grade {
        match self.score {
            Some(score) if score > 0.0 => Grade::Correct,
            Some(_) => Grade::Incorrect,
            None => Grade::Ungraded,
        }
    }
}
