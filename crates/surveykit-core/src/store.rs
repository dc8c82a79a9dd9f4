//! The survey store.
//!
//! Owns the survey-wide state: metadata, the question collection, and the
//! answered list. Every change goes through [`SurveyStore::dispatch`], which
//! installs a whole new collection; the operations above it compute that
//! collection from the current state.

use std::sync::Arc;

use crate::error::SurveyError;
use crate::model::{AnswerToQuestion, Question, QuestionType, SurveyInfo};
use crate::mutator::with_question_type;
use crate::reconcile::upsert_answer;
use crate::report::SurveyReport;
use crate::respond::{build_answer, Response};
use crate::scoring::compute_score;
use crate::traits::{StatusReporter, TracingReporter};

/// A state change, applied by replacing one collection wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyAction {
    UpdateAnswersToQuestions(Vec<AnswerToQuestion>),
    UpdateQuestions(Vec<Question>),
    UpdateSurveyInfo(SurveyInfo),
}

/// Central survey state.
pub struct SurveyStore {
    info: SurveyInfo,
    questions: Vec<Question>,
    answers_to_questions: Vec<AnswerToQuestion>,
    reporter: Arc<dyn StatusReporter>,
}

impl SurveyStore {
    /// A store with no answers yet, reporting through `tracing`.
    pub fn new(info: SurveyInfo, questions: Vec<Question>) -> Self {
        Self {
            info,
            questions,
            answers_to_questions: Vec::new(),
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn StatusReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn info(&self) -> &SurveyInfo {
        &self.info
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers_to_questions(&self) -> &[AnswerToQuestion] {
        &self.answers_to_questions
    }

    /// The question at 1-based `id`.
    pub fn question(&self, id: u32) -> Result<&Question, SurveyError> {
        id.checked_sub(1)
            .and_then(|index| self.questions.get(index as usize))
            .ok_or(SurveyError::UnknownQuestion {
                id,
                count: self.questions.len(),
            })
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: SurveyAction) {
        match action {
            SurveyAction::UpdateAnswersToQuestions(answers) => self.answers_to_questions = answers,
            SurveyAction::UpdateQuestions(questions) => self.questions = questions,
            SurveyAction::UpdateSurveyInfo(info) => self.info = info,
        }
    }

    /// Record an answer, replacing an earlier answer to the same question snapshot.
    pub fn update_answers_to_questions(&mut self, answer: AnswerToQuestion) {
        let updated = upsert_answer(&self.answers_to_questions, answer);
        self.dispatch(SurveyAction::UpdateAnswersToQuestions(updated));
    }

    /// Build an answer from raw input against the current question and record it.
    pub fn respond(&mut self, response: &Response) -> Result<(), SurveyError> {
        let question = self.question(response.question_id())?;
        let answer = build_answer(question, response)?;
        self.update_answers_to_questions(answer);
        Ok(())
    }

    pub fn update_questions(&mut self, questions: Vec<Question>) {
        self.dispatch(SurveyAction::UpdateQuestions(questions));
    }

    /// Replace the question at position `question.id - 1`.
    pub fn update_question(&mut self, question: Question) -> Result<(), SurveyError> {
        self.question(question.id)?;
        let index = question.id as usize - 1;
        let mut updated = self.questions.clone();
        updated[index] = question;
        self.dispatch(SurveyAction::UpdateQuestions(updated));
        Ok(())
    }

    /// Change a question's type, resetting its shape-specific fields.
    pub fn update_question_type(&mut self, id: u32, kind: QuestionType) -> Result<&Question, SurveyError> {
        let retyped = with_question_type(self.question(id)?.clone(), kind);
        self.update_question(retyped)?;
        self.question(id)
    }

    /// Append a question with the next id and the defaults of `kind`.
    pub fn add_question(&mut self, topic: impl Into<String>, kind: QuestionType) -> &Question {
        let id = self.questions.len() as u32 + 1;
        let mut updated = self.questions.clone();
        updated.push(Question::new(id, topic, kind));
        self.dispatch(SurveyAction::UpdateQuestions(updated));
        &self.questions[self.questions.len() - 1]
    }

    pub fn update_survey_info(&mut self, info: SurveyInfo) {
        self.dispatch(SurveyAction::UpdateSurveyInfo(info));
    }

    /// Install a pre-seeded answered list and report it.
    pub fn load_answers_to_questions(&mut self, survey_id: u32, answers: Vec<AnswerToQuestion>) {
        self.reporter.on_answers_loaded(survey_id, &answers);
        self.dispatch(SurveyAction::UpdateAnswersToQuestions(answers));
    }

    /// Total score of the current answered list.
    pub fn score(&self) -> f64 {
        compute_score(&self.answers_to_questions)
    }

    /// Report completion and return the completion report.
    pub fn finish_survey(&self, survey_id: u32) -> SurveyReport {
        let score = self.score();
        self.reporter
            .on_survey_finished(survey_id, &self.answers_to_questions, score);
        SurveyReport::new(
            survey_id,
            self.info.clone(),
            self.answers_to_questions.clone(),
            score,
        )
    }
}
