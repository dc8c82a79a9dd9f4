//! Survey completion reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnswerToQuestion, SurveyInfo};
use crate::scoring::{score_breakdown, AnswerScore};

/// What a finished survey looked like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// The survey id the respondent finished.
    pub survey_id: u32,
    /// Survey metadata at the time of finishing.
    pub survey: SurveyInfo,
    /// When the survey was finished.
    pub finished_at: DateTime<Utc>,
    /// The answered list, in answer order.
    pub answers: Vec<AnswerToQuestion>,
    /// Per-answer scores.
    pub breakdown: Vec<AnswerScore>,
    /// Total score.
    pub score: f64,
}

impl SurveyReport {
    pub fn new(survey_id: u32, survey: SurveyInfo, answers: Vec<AnswerToQuestion>, score: f64) -> Self {
        let breakdown = score_breakdown(&answers);
        Self {
            id: Uuid::new_v4(),
            survey_id,
            survey,
            finished_at: Utc::now(),
            answers,
            breakdown,
            score,
        }
    }

    /// Number of answers that carried a score.
    pub fn graded_count(&self) -> usize {
        self.breakdown.iter().filter(|line| line.graded).count()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SurveyReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Question, QuestionType, TextAnswer};

    fn sample() -> SurveyReport {
        let question = Question::new(1, "Capital of Italy?", QuestionType::ShortTextField);
        let answers = vec![
            AnswerToQuestion::new(question.clone(), Answer::Text(TextAnswer::graded("Rome", 2.0))),
            AnswerToQuestion::new(
                Question::new(2, "Thoughts?", QuestionType::DetailedTextField),
                Answer::Text(TextAnswer::ungraded("Nice")),
            ),
        ];
        SurveyReport::new(1, SurveyInfo::new(1, "Geography"), answers, 2.0)
    }

    #[test]
    fn breakdown_follows_answers() {
        let report = sample();
        assert_eq!(report.breakdown.len(), 2);
        assert_eq!(report.breakdown[0].score, 2.0);
        assert_eq!(report.graded_count(), 1);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.json");
        let report = sample();
        report.save_json(&path).unwrap();

        let loaded = SurveyReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.answers, report.answers);
        assert_eq!(loaded.score, 2.0);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SurveyReport::load_json(&dir.path().join("missing.json")).is_err());
    }
}
