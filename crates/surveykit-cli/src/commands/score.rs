//! The `surveykit score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

use surveykit_core::scoring::compute_score_untyped;

/// Entries of a bare answered list, or the `answers` of a fixture or report.
fn answer_entries(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut object) => match object.remove("answers") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => anyhow::bail!("\"answers\" is not an array"),
            None => anyhow::bail!("expected an array of answers or an object with \"answers\""),
        },
        _ => anyhow::bail!("expected an array of answers or an object with \"answers\""),
    }
}

pub fn execute(answers_path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", answers_path.display()))?;
    let entries = answer_entries(document)
        .with_context(|| format!("no answers in {}", answers_path.display()))?;

    let score = compute_score_untyped(&entries);
    println!("{} answer(s)", entries.len());
    println!("Score: {score}");

    Ok(())
}
