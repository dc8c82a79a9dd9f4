//! The `surveykit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use surveykit_core::parser::{load_fixture_directory, parse_fixture, validate_fixture};

pub fn execute(fixture_path: PathBuf) -> Result<()> {
    let fixtures = if fixture_path.is_dir() {
        load_fixture_directory(&fixture_path)?
    } else {
        vec![parse_fixture(&fixture_path)?]
    };

    let mut total_warnings = 0;

    for fixture in &fixtures {
        println!(
            "Survey: {} ({} questions)",
            fixture.survey.title,
            fixture.questions.len()
        );

        let warnings = validate_fixture(fixture);
        for w in &warnings {
            let prefix = w
                .question_id
                .map(|id| format!("  [question {id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All fixtures valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
