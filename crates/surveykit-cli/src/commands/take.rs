//! The `surveykit take` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use surveykit_core::config::SurveykitConfig;
use surveykit_core::model::Answer;
use surveykit_core::parser::{parse_fixture, parse_responses, validate_fixture};
use surveykit_core::report::SurveyReport;
use surveykit_core::{demo, SurveyStore};

pub fn execute(
    config: &SurveykitConfig,
    fixture: Option<PathBuf>,
    responses: Option<PathBuf>,
    survey_id: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let fixture = match fixture.or_else(|| config.fixture.clone()) {
        Some(path) => parse_fixture(&path)?,
        None => demo::demo_fixture()?,
    };

    for warning in validate_fixture(&fixture) {
        match warning.question_id {
            Some(id) => tracing::warn!(question_id = id, "{}", warning.message),
            None => tracing::warn!("{}", warning.message),
        }
    }

    let survey_id = survey_id.or(config.survey_id).unwrap_or(fixture.survey.id);
    let mut store = SurveyStore::new(fixture.survey, fixture.questions);
    store.load_answers_to_questions(survey_id, fixture.answers);

    if let Some(path) = responses {
        let script = parse_responses(&path)?;
        for response in &script.responses {
            store.respond(response).with_context(|| {
                format!(
                    "cannot apply response to question {} from {}",
                    response.question_id(),
                    path.display()
                )
            })?;
        }
    }

    let report = store.finish_survey(survey_id);
    print_summary(&report);
    println!("Total score: {}", report.score);

    if let Some(dir) = output {
        std::fs::create_dir_all(&dir)?;
        let timestamp = report.finished_at.format("%Y-%m-%dT%H%M%S");
        let path = dir.join(format!("survey-{survey_id}-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn describe(answer: &Answer) -> String {
    match answer {
        Answer::Choice(option) => option.label.clone(),
        Answer::Text(text) => text.text.clone(),
        Answer::OptionSet(options) => options
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        Answer::Matches(lists) => lists
            .left_list
            .iter()
            .zip(&lists.right_list)
            .map(|(left, right)| format!("{} -> {}", left.label, right.label))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn print_summary(report: &SurveyReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question", "Topic", "Answer", "Score"]);

    for (line, entry) in report.breakdown.iter().zip(&report.answers) {
        let score = if line.graded {
            line.score.to_string()
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            Cell::new(line.question_id),
            Cell::new(&line.topic),
            Cell::new(describe(&entry.answer)),
            Cell::new(score),
        ]);
    }

    println!("{} ({} answered, {} graded)", report.survey.title, report.answers.len(), report.graded_count());
    println!("{table}");
}
