//! Shape classifiers for untagged answers.
//!
//! Answers arrive on the wire without a discriminant; their variant is
//! determined by which fields are present. The predicates here must be
//! checked in the fixed order option → text → matches → set, since shapes
//! can otherwise overlap when optional fields are absent.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::SurveyError;
use crate::model::Answer;

/// Which shape an answer has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    Choice,
    Text,
    Matches,
    OptionSet,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Choice => write!(f, "option"),
            AnswerKind::Text => write!(f, "text"),
            AnswerKind::Matches => write!(f, "matches"),
            AnswerKind::OptionSet => write!(f, "option-set"),
        }
    }
}

/// `true` if the value has a `label` and neither `text` nor `leftList`.
pub fn is_option(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| {
        obj.contains_key("label") && !obj.contains_key("text") && !obj.contains_key("leftList")
    })
}

/// `true` if the value has a `text` field.
pub fn is_text_answer(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| obj.contains_key("text"))
}

/// `true` if the value has both `leftList` and `rightList`.
pub fn is_matches(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("leftList") && obj.contains_key("rightList"))
}

/// `true` if the value is a sequence.
pub fn is_set_of_options(value: &Value) -> bool {
    value.is_array()
}

/// Classify a raw answer, honouring the predicate precedence.
pub fn classify(value: &Value) -> Option<AnswerKind> {
    if is_option(value) {
        Some(AnswerKind::Choice)
    } else if is_text_answer(value) {
        Some(AnswerKind::Text)
    } else if is_matches(value) {
        Some(AnswerKind::Matches)
    } else if is_set_of_options(value) {
        Some(AnswerKind::OptionSet)
    } else {
        None
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(_) => "boolean".into(),
        Value::Number(n) => format!("number {n}"),
        Value::String(_) => "string".into(),
        Value::Array(_) => "array".into(),
        Value::Object(obj) => {
            let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
    }
}

impl Answer {
    /// Convert an untagged answer into its typed variant.
    pub fn from_value(value: Value) -> Result<Self, SurveyError> {
        let Some(kind) = classify(&value) else {
            return Err(SurveyError::UnclassifiableAnswer(describe(&value)));
        };

        let answer = match kind {
            AnswerKind::Choice => serde_json::from_value(value).map(Answer::Choice),
            AnswerKind::Text => serde_json::from_value(value).map(Answer::Text),
            AnswerKind::Matches => serde_json::from_value(value).map(Answer::Matches),
            AnswerKind::OptionSet => serde_json::from_value(value).map(Answer::OptionSet),
        };

        answer.map_err(|e| SurveyError::UnclassifiableAnswer(format!("malformed {kind}: {e}")))
    }

    /// The shape of this answer.
    pub fn kind(&self) -> AnswerKind {
        match self {
            Answer::Choice(_) => AnswerKind::Choice,
            Answer::Text(_) => AnswerKind::Text,
            Answer::Matches(_) => AnswerKind::Matches,
            Answer::OptionSet(_) => AnswerKind::OptionSet,
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Answer::from_value(value).map_err(serde::de::Error::custom)
    }
}
