//! Survey fixture parser.
//!
//! Loads survey fixtures and response scripts from JSON or TOML files and
//! directories, and validates fixtures for common issues.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Answer, AnswerToQuestion, Question, QuestionOption, QuestionOptions, QuestionType, SurveyInfo};
use crate::respond::Response;

/// A survey with its questions and any pre-seeded answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyFixture {
    pub survey: SurveyInfo,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: Vec<AnswerToQuestion>,
}

/// A scripted sequence of responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseScript {
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// File formats fixtures can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Toml,
}

impl FixtureFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FixtureFormat::Json),
            Some("toml") => Ok(FixtureFormat::Toml),
            _ => anyhow::bail!(
                "unsupported fixture file (expected .json or .toml): {}",
                path.display()
            ),
        }
    }
}

fn read(path: &Path) -> Result<(String, FixtureFormat)> {
    let format = FixtureFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture file: {}", path.display()))?;
    Ok((content, format))
}

fn decode<T: serde::de::DeserializeOwned>(content: &str, format: FixtureFormat, source_path: &Path) -> Result<T> {
    match format {
        FixtureFormat::Json => serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display())),
        FixtureFormat::Toml => toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display())),
    }
}

/// Parse a single fixture file.
pub fn parse_fixture(path: &Path) -> Result<SurveyFixture> {
    let (content, format) = read(path)?;
    parse_fixture_str(&content, format, path)
}

/// Parse fixture content (useful for testing).
pub fn parse_fixture_str(content: &str, format: FixtureFormat, source_path: &Path) -> Result<SurveyFixture> {
    decode(content, format, source_path)
}

/// Parse a response script file.
pub fn parse_responses(path: &Path) -> Result<ResponseScript> {
    let (content, format) = read(path)?;
    decode(&content, format, path)
}

/// Write a fixture back to disk in the format its extension names.
pub fn write_fixture(path: &Path, fixture: &SurveyFixture) -> Result<()> {
    let content = match FixtureFormat::from_path(path)? {
        FixtureFormat::Json => {
            serde_json::to_string_pretty(fixture).context("failed to serialize fixture")?
        }
        FixtureFormat::Toml => toml::to_string_pretty(fixture).context("failed to serialize fixture")?,
    };
    std::fs::write(path, content)
        .with_context(|| format!("failed to write fixture: {}", path.display()))
}

/// Recursively load all `.json` and `.toml` fixtures from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_fixture_directory(dir: &Path) -> Result<Vec<SurveyFixture>> {
    let mut fixtures = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            fixtures.extend(load_fixture_directory(&path)?);
        } else if FixtureFormat::from_path(&path).is_ok() {
            match parse_fixture(&path) {
                Ok(fixture) => fixtures.push(fixture),
                Err(e) => {
                    tracing::warn!("skipping {}: {e:#}", path.display());
                }
            }
        }
    }

    Ok(fixtures)
}

/// A warning from fixture validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn question(id: u32, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id),
            message: message.into(),
        }
    }
}

fn duplicate_ids(options: &[QuestionOption]) -> Vec<u32> {
    let mut seen = HashSet::new();
    options
        .iter()
        .filter(|o| !seen.insert(o.id))
        .map(|o| o.id)
        .collect()
}

fn check_shape(question: &Question, warnings: &mut Vec<ValidationWarning>) {
    let id = question.id;
    let kind = question.kind;

    if !kind.is_text() && question.correct_answer.is_some() {
        warnings.push(ValidationWarning::question(
            id,
            format!("{kind} question has a correctAnswer"),
        ));
    }

    match (&question.options, kind) {
        (Some(_), QuestionType::ShortTextField | QuestionType::DetailedTextField) => {
            warnings.push(ValidationWarning::question(id, format!("{kind} question has options")));
        }
        (Some(QuestionOptions::List(options)), QuestionType::OneChoice | QuestionType::MultipleChoice) => {
            if options.is_empty() {
                warnings.push(ValidationWarning::question(id, "option list is empty"));
            }
            for dup in duplicate_ids(options) {
                warnings.push(ValidationWarning::question(id, format!("duplicate option id: {dup}")));
            }
        }
        (Some(QuestionOptions::Matches(lists)), QuestionType::Matchmaking) => {
            for dup in duplicate_ids(&lists.left_list) {
                warnings.push(ValidationWarning::question(id, format!("duplicate left option id: {dup}")));
            }
            for dup in duplicate_ids(&lists.right_list) {
                warnings.push(ValidationWarning::question(id, format!("duplicate right option id: {dup}")));
            }
            let right_ids: HashSet<u32> = lists.right_list.iter().map(|o| o.id).collect();
            for left in &lists.left_list {
                match left.related_option_id {
                    Some(related) if right_ids.contains(&related) => {}
                    Some(related) => warnings.push(ValidationWarning::question(
                        id,
                        format!("left option {} relates to missing right option {related}", left.id),
                    )),
                    None => warnings.push(ValidationWarning::question(
                        id,
                        format!("left option {} has no relatedOptionId", left.id),
                    )),
                }
            }
        }
        (Some(_), _) => {
            warnings.push(ValidationWarning::question(
                id,
                format!("options do not match the {kind} question shape"),
            ));
        }
        (None, QuestionType::ShortTextField | QuestionType::DetailedTextField) => {}
        (None, _) => {
            warnings.push(ValidationWarning::question(id, format!("{kind} question has no options")));
        }
    }
}

fn expected_answer(kind: QuestionType, answer: &Answer) -> bool {
    matches!(
        (kind, answer),
        (QuestionType::OneChoice, Answer::Choice(_))
            | (QuestionType::MultipleChoice, Answer::OptionSet(_))
            | (QuestionType::ShortTextField, Answer::Text(_))
            | (QuestionType::DetailedTextField, Answer::Text(_))
            | (QuestionType::Matchmaking, Answer::Matches(_))
    )
}

/// Validate a fixture for common issues.
pub fn validate_fixture(fixture: &SurveyFixture) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Ids index the collection: question n must sit at position n.
    for (index, question) in fixture.questions.iter().enumerate() {
        let expected = index as u32 + 1;
        if question.id != expected {
            warnings.push(ValidationWarning::question(
                question.id,
                format!("question id {} at position {expected} breaks 1-based numbering", question.id),
            ));
        }
    }

    for question in &fixture.questions {
        if question.topic.trim().is_empty() {
            warnings.push(ValidationWarning::question(question.id, "topic is empty"));
        }
        check_shape(question, &mut warnings);
    }

    for entry in &fixture.answers {
        let id = entry.question.id;
        if !fixture.questions.contains(&entry.question) {
            warnings.push(ValidationWarning::question(
                id,
                "answer snapshot matches no current question; re-answering will add a second entry",
            ));
        }
        if !expected_answer(entry.question.kind, &entry.answer) {
            warnings.push(ValidationWarning::question(
                id,
                format!("{} answer given to {} question", entry.answer.kind(), entry.question.kind),
            ));
        }
    }

    warnings
}
