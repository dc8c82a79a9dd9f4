//! End-to-end survey flow tests against the shipped fixtures.
//!
//! These drive the store the same way `surveykit take` does, but observe the
//! status lines through a recording reporter instead of log output.

use std::path::Path;
use std::sync::Arc;

use surveykit_core::model::Answer;
use surveykit_core::parser::{parse_fixture, parse_responses, validate_fixture};
use surveykit_core::report::SurveyReport;
use surveykit_core::respond::Response;
use surveykit_core::traits::RecordingReporter;
use surveykit_core::{QuestionType, SurveyStore};

fn demo_store() -> (Arc<RecordingReporter>, SurveyStore) {
    let fixture = parse_fixture(Path::new("../../fixtures/demo.json")).unwrap();
    let reporter = Arc::new(RecordingReporter::new());
    let mut store = SurveyStore::new(fixture.survey, fixture.questions)
        .with_reporter(reporter.clone());
    store.load_answers_to_questions(1, fixture.answers);
    (reporter, store)
}

#[test]
fn shipped_fixtures_are_valid() {
    for path in ["../../fixtures/demo.json", "../../fixtures/retro.toml"] {
        let fixture = parse_fixture(Path::new(path)).unwrap();
        let warnings = validate_fixture(&fixture);
        assert!(warnings.is_empty(), "{path}: {warnings:?}");
    }
}

#[test]
fn demo_responses_score_seven() {
    let (reporter, mut store) = demo_store();
    let script = parse_responses(Path::new("../../responses/demo.toml")).unwrap();
    assert_eq!(script.responses.len(), 5);

    for response in &script.responses {
        store.respond(response).unwrap();
    }

    // The seeded Lyon answer was replaced in place, not duplicated.
    let answered = store.answers_to_questions();
    assert_eq!(answered.len(), 5);
    assert_eq!(answered[0].question.id, 1);
    assert!(matches!(&answered[0].answer, Answer::Choice(o) if o.label == "Paris"));

    let report = store.finish_survey(1);
    assert_eq!(report.score, 7.0);
    assert_eq!(report.graded_count(), 4);
    assert_eq!(
        reporter.lines(),
        vec![
            "Answers to Questions from Survey 1 have been loaded",
            "User has finished survey 1",
            "Score: 7",
        ]
    );
}

#[test]
fn wrong_pairing_earns_nothing_for_that_pair() {
    let (_, mut store) = demo_store();
    store
        .respond(&Response::Pairs {
            question: 4,
            pairs: vec![(1, 1), (2, 1)],
        })
        .unwrap();
    // Seeded Lyon (0) plus Portugal -> Lisbon (1).
    assert_eq!(store.score(), 1.0);
}

#[test]
fn retyped_question_gets_a_second_entry() {
    let (_, mut store) = demo_store();
    assert_eq!(store.answers_to_questions().len(), 1);

    store
        .update_question_type(1, QuestionType::ShortTextField)
        .unwrap();
    store
        .respond(&Response::Text {
            question: 1,
            text: "Paris".into(),
        })
        .unwrap();

    let answered = store.answers_to_questions();
    assert_eq!(answered.len(), 2);
    assert_eq!(answered[0].question.kind, QuestionType::OneChoice);
    assert_eq!(answered[1].question.kind, QuestionType::ShortTextField);
}

#[test]
fn report_survives_a_save_load_cycle() {
    let (_, mut store) = demo_store();
    store
        .respond(&Response::Text {
            question: 2,
            text: "ROME".into(),
        })
        .unwrap();
    let report = store.finish_survey(1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("report.json");
    report.save_json(&path).unwrap();

    let loaded = SurveyReport::load_json(&path).unwrap();
    assert_eq!(loaded.id, report.id);
    assert_eq!(loaded.score, 2.0);
    assert_eq!(loaded.answers, report.answers);
    assert_eq!(loaded.breakdown, report.breakdown);
}

#[test]
fn report_keeps_requested_survey_id_apart_from_fixture_id() {
    let (reporter, store) = demo_store();
    let report = store.finish_survey(42);
    assert_eq!(report.survey_id, 42);
    assert_eq!(report.survey.id, 1);
    assert!(reporter
        .lines()
        .contains(&"User has finished survey 42".to_string()));
}
