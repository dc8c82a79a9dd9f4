//! Status reporting for survey lifecycle events.
//!
//! Loading answers and finishing a survey only report what happened; the
//! reporter decides where those lines go.

use std::sync::Mutex;

use crate::model::AnswerToQuestion;

/// Line reported when a survey is finished.
pub fn finished_message(survey_id: u32) -> String {
    format!("User has finished survey {survey_id}")
}

/// Line reporting the final score.
pub fn score_message(score: f64) -> String {
    format!("Score: {score}")
}

/// Line reported when pre-seeded answers are installed.
pub fn loaded_message(survey_id: u32) -> String {
    format!("Answers to Questions from Survey {survey_id} have been loaded")
}

/// Sink for survey lifecycle events.
pub trait StatusReporter: Send + Sync {
    fn on_answers_loaded(&self, survey_id: u32, answers: &[AnswerToQuestion]);
    fn on_survey_finished(&self, survey_id: u32, answers: &[AnswerToQuestion], score: f64);
}

/// Emits status lines through `tracing`.
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn on_answers_loaded(&self, survey_id: u32, answers: &[AnswerToQuestion]) {
        tracing::info!(count = answers.len(), "{}", loaded_message(survey_id));
    }

    fn on_survey_finished(&self, survey_id: u32, answers: &[AnswerToQuestion], score: f64) {
        match serde_json::to_string(answers) {
            Ok(json) => tracing::debug!(answers = %json, "answered questions"),
            Err(e) => tracing::warn!("could not serialize answers: {e}"),
        }
        tracing::info!("{}", finished_message(survey_id));
        tracing::info!("{}", score_message(score));
    }
}

/// No-op status reporter.
pub struct NoopReporter;

impl StatusReporter for NoopReporter {
    fn on_answers_loaded(&self, _: u32, _: &[AnswerToQuestion]) {}
    fn on_survey_finished(&self, _: u32, _: &[AnswerToQuestion], _: f64) {}
}

/// Keeps every status line in memory, in order.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl StatusReporter for RecordingReporter {
    fn on_answers_loaded(&self, survey_id: u32, _: &[AnswerToQuestion]) {
        self.push(loaded_message(survey_id));
    }

    fn on_survey_finished(&self, survey_id: u32, _: &[AnswerToQuestion], score: f64) {
        self.push(finished_message(survey_id));
        self.push(score_message(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_formats() {
        assert_eq!(finished_message(3), "User has finished survey 3");
        assert_eq!(score_message(5.0), "Score: 5");
        assert_eq!(score_message(2.5), "Score: 2.5");
        assert_eq!(
            loaded_message(3),
            "Answers to Questions from Survey 3 have been loaded"
        );
    }

    #[test]
    fn recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.on_answers_loaded(7, &[]);
        reporter.on_survey_finished(7, &[], 4.0);
        assert_eq!(
            reporter.lines(),
            vec![
                "Answers to Questions from Survey 7 have been loaded",
                "User has finished survey 7",
                "Score: 4",
            ]
        );
    }
}
