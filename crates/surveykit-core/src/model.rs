//! Core data model types for surveykit.
//!
//! These are the fundamental types the whole system uses to represent
//! questions, their options, the answers given to them, and survey metadata.
//! Field names follow the camelCase wire format of survey fixtures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SurveyError;

/// A single survey item.
///
/// `id` is 1-based and dense: question `n` lives at `questions[n - 1]`.
/// Equality is structural over every field, which is what answer
/// reconciliation uses to decide whether two snapshots are the same question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 1-based position in the question collection.
    pub id: u32,
    /// The prompt shown to the respondent.
    pub topic: String,
    /// Determines which of `options` / `correct_answer` is populated.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Choice options or matchmaking lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<QuestionOptions>,
    /// Reference answer for text questions. Absent means ungraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<TextAnswer>,
}

impl Question {
    /// Create a question with the default shape for `kind`.
    pub fn new(id: u32, topic: impl Into<String>, kind: QuestionType) -> Self {
        let blank = Self {
            id,
            topic: topic.into(),
            kind,
            options: None,
            correct_answer: None,
        };
        crate::mutator::with_question_type(blank, kind)
    }

    /// The flat option list of a choice question.
    pub fn option_list(&self) -> Option<&[QuestionOption]> {
        match &self.options {
            Some(QuestionOptions::List(options)) => Some(options),
            _ => None,
        }
    }

    /// The left/right lists of a matchmaking question.
    pub fn match_lists(&self) -> Option<&MatchLists> {
        match &self.options {
            Some(QuestionOptions::Matches(lists)) => Some(lists),
            _ => None,
        }
    }
}

/// Supported question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    OneChoice,
    MultipleChoice,
    ShortTextField,
    DetailedTextField,
    Matchmaking,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::OneChoice,
        QuestionType::MultipleChoice,
        QuestionType::ShortTextField,
        QuestionType::DetailedTextField,
        QuestionType::Matchmaking,
    ];

    /// OneChoice or MultipleChoice.
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::OneChoice | QuestionType::MultipleChoice)
    }

    /// ShortTextField or DetailedTextField.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            QuestionType::ShortTextField | QuestionType::DetailedTextField
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::OneChoice => write!(f, "OneChoice"),
            QuestionType::MultipleChoice => write!(f, "MultipleChoice"),
            QuestionType::ShortTextField => write!(f, "ShortTextField"),
            QuestionType::DetailedTextField => write!(f, "DetailedTextField"),
            QuestionType::Matchmaking => write!(f, "Matchmaking"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "onechoice" | "single" | "singlechoice" => Ok(QuestionType::OneChoice),
            "multiplechoice" | "multi" => Ok(QuestionType::MultipleChoice),
            "shorttextfield" | "shorttext" | "text" => Ok(QuestionType::ShortTextField),
            "detailedtextfield" | "detailedtext" | "longtext" => {
                Ok(QuestionType::DetailedTextField)
            }
            "matchmaking" | "match" => Ok(QuestionType::Matchmaking),
            _ => Err(SurveyError::UnknownQuestionType(s.to_string())),
        }
    }
}

/// A labeled, scorable choice.
///
/// Also the shape of a single-option answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Matchmaking left list only: the right-list option that pairs with this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_option_id: Option<u32>,
}

impl QuestionOption {
    /// An unscored option.
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            score: None,
            related_option_id: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn related_to(mut self, right_id: u32) -> Self {
        self.related_option_id = Some(right_id);
        self
    }
}

/// Left and right lists of a matchmaking question, or of a match answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchLists {
    pub left_list: Vec<QuestionOption>,
    pub right_list: Vec<QuestionOption>,
}

/// The `options` field of a question: a flat list for choice questions or
/// left/right lists for matchmaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionOptions {
    List(Vec<QuestionOption>),
    Matches(MatchLists),
}

/// Free-text answer, also used as a text question's reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnswer {
    pub text: String,
    /// Absent when the question has no reference answer (ungraded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl TextAnswer {
    pub fn graded(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score: Some(score),
        }
    }

    pub fn ungraded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: None,
        }
    }
}

/// An answer given to a question.
///
/// On the wire the variants are untagged and told apart by shape; see
/// [`crate::classify`] for the precedence rules used when reading them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// A single selected option: `{ id, label, score? }`.
    Choice(QuestionOption),
    /// Free text: `{ text, score? }`.
    Text(TextAnswer),
    /// Matchmaking pairing: `{ leftList, rightList }`.
    Matches(MatchLists),
    /// A set of selected options: `[ ... ]`.
    OptionSet(Vec<QuestionOption>),
}

/// A question snapshot paired with the answer given to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerToQuestion {
    /// The question as it stood when it was answered.
    pub question: Question,
    pub answer: Answer,
}

impl AnswerToQuestion {
    pub fn new(question: Question, answer: Answer) -> Self {
        Self { question, answer }
    }
}

/// Survey metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyInfo {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SurveyInfo {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
        }
    }
}
