//! The `surveykit retype` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use surveykit_core::parser::{parse_fixture, write_fixture};
use surveykit_core::traits::NoopReporter;
use surveykit_core::{QuestionType, SurveyStore};

pub fn execute(fixture_path: PathBuf, question: u32, kind: String, write: bool) -> Result<()> {
    let kind: QuestionType = kind.parse()?;
    let mut fixture = parse_fixture(&fixture_path)?;

    let mut store = SurveyStore::new(fixture.survey.clone(), fixture.questions.clone())
        .with_reporter(Arc::new(NoopReporter));
    let updated = store
        .update_question_type(question, kind)
        .with_context(|| format!("cannot retype question in {}", fixture_path.display()))?;

    if !write {
        println!("{}", serde_json::to_string_pretty(updated)?);
        return Ok(());
    }

    fixture.questions = store.questions().to_vec();
    write_fixture(&fixture_path, &fixture)?;
    println!(
        "Question {question} is now {kind} in {}",
        fixture_path.display()
    );

    Ok(())
}
