//! Survey model, answer reconciliation, and scoring.
//!
//! This crate defines the survey data model and the logic that keeps the
//! answered list consistent as answers are given or revised, along with score
//! aggregation over the four answer shapes.

pub mod classify;
pub mod config;
pub mod demo;
pub mod error;
pub mod model;
pub mod mutator;
pub mod parser;
pub mod reconcile;
pub mod report;
pub mod respond;
pub mod scoring;
pub mod store;
pub mod traits;

pub use error::SurveyError;
pub use model::{Answer, AnswerToQuestion, Question, QuestionType, SurveyInfo};
pub use store::{SurveyAction, SurveyStore};
