//! Turning raw respondent input into answers.
//!
//! A [`Response`] is what an input widget produces: a selected option id,
//! typed text, a set of selected ids, or left/right pairings. Building an
//! answer snapshots the question as it currently stands.

use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::model::{Answer, AnswerToQuestion, MatchLists, Question, QuestionOption, QuestionType};
use crate::scoring::grade_text_answer;

/// Raw input for one question, addressed by question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// One selected option of a OneChoice question.
    Choice { question: u32, option: u32 },
    /// Selected options of a MultipleChoice question, in selection order.
    Choices { question: u32, options: Vec<u32> },
    /// Text typed into a ShortTextField or DetailedTextField question.
    Text { question: u32, text: String },
    /// `(left_id, right_id)` pairings of a Matchmaking question.
    Pairs { question: u32, pairs: Vec<(u32, u32)> },
}

impl Response {
    /// The id of the question this response answers.
    pub fn question_id(&self) -> u32 {
        match self {
            Response::Choice { question, .. }
            | Response::Choices { question, .. }
            | Response::Text { question, .. }
            | Response::Pairs { question, .. } => *question,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Response::Choice { .. } => "choice",
            Response::Choices { .. } => "choices",
            Response::Text { .. } => "text",
            Response::Pairs { .. } => "pairs",
        }
    }
}

fn find(options: &[QuestionOption], id: u32) -> Option<&QuestionOption> {
    options.iter().find(|option| option.id == id)
}

/// Build the answer a response gives to `question`.
pub fn build_answer(question: &Question, response: &Response) -> Result<AnswerToQuestion, SurveyError> {
    let answer = match (question.kind, response) {
        (QuestionType::OneChoice, Response::Choice { option, .. }) => {
            let selected = question.option_list().and_then(|options| find(options, *option));
            Answer::Choice(QuestionOption {
                id: *option,
                label: selected.map(|o| o.label.clone()).unwrap_or_default(),
                score: selected.and_then(|o| o.score),
                related_option_id: None,
            })
        }
        (QuestionType::MultipleChoice, Response::Choices { options, .. }) => {
            let available = question.option_list().unwrap_or_default();
            let selected = options
                .iter()
                .filter_map(|id| {
                    let found = find(available, *id).cloned();
                    if found.is_none() {
                        tracing::debug!(question_id = question.id, option = id, "ignoring unknown option");
                    }
                    found
                })
                .collect();
            Answer::OptionSet(selected)
        }
        (QuestionType::ShortTextField | QuestionType::DetailedTextField, Response::Text { text, .. }) => {
            Answer::Text(grade_text_answer(question, text))
        }
        (QuestionType::Matchmaking, Response::Pairs { pairs, .. }) => {
            Answer::Matches(pair_up(question, pairs))
        }
        _ => {
            return Err(SurveyError::ResponseMismatch {
                id: question.id,
                question_type: question.kind,
                response: response.name(),
            });
        }
    };

    Ok(AnswerToQuestion::new(question.clone(), answer))
}

/// A left entry keeps its score only when paired with its related option.
fn pair_up(question: &Question, pairs: &[(u32, u32)]) -> MatchLists {
    let mut answer = MatchLists {
        left_list: Vec::with_capacity(pairs.len()),
        right_list: Vec::with_capacity(pairs.len()),
    };
    let Some(lists) = question.match_lists() else {
        return answer;
    };

    for &(left_id, right_id) in pairs {
        let (Some(left), Some(right)) = (find(&lists.left_list, left_id), find(&lists.right_list, right_id)) else {
            tracing::debug!(question_id = question.id, left_id, right_id, "ignoring unknown pairing");
            continue;
        };
        let earned = if left.related_option_id == Some(right_id) {
            left.score.unwrap_or(0.0)
        } else {
            0.0
        };
        answer.left_list.push(QuestionOption {
            score: Some(earned),
            ..left.clone()
        });
        answer.right_list.push(right.clone());
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionOptions, TextAnswer};
    use crate::scoring::answer_score;

    fn one_choice() -> Question {
        Question {
            id: 1,
            topic: "Capital of France?".into(),
            kind: QuestionType::OneChoice,
            options: Some(QuestionOptions::List(vec![
                QuestionOption::new(1, "Paris").with_score(1.0),
                QuestionOption::new(2, "Lyon").with_score(0.0),
            ])),
            correct_answer: None,
        }
    }

    fn matchmaking() -> Question {
        Question {
            id: 4,
            topic: "Match".into(),
            kind: QuestionType::Matchmaking,
            options: Some(QuestionOptions::Matches(MatchLists {
                left_list: vec![
                    QuestionOption::new(1, "Spain").related_to(2).with_score(1.0),
                    QuestionOption::new(2, "Portugal").related_to(1).with_score(1.0),
                ],
                right_list: vec![QuestionOption::new(1, "Lisbon"), QuestionOption::new(2, "Madrid")],
            })),
            correct_answer: None,
        }
    }

    #[test]
    fn choice_copies_label_and_score() {
        let question = one_choice();
        let built = build_answer(&question, &Response::Choice { question: 1, option: 1 }).unwrap();
        assert_eq!(built.question, question);
        assert_eq!(
            built.answer,
            Answer::Choice(QuestionOption::new(1, "Paris").with_score(1.0))
        );
    }

    #[test]
    fn unknown_choice_has_empty_label_and_no_score() {
        let built = build_answer(&one_choice(), &Response::Choice { question: 1, option: 9 }).unwrap();
        assert_eq!(built.answer, Answer::Choice(QuestionOption::new(9, "")));
    }

    #[test]
    fn choices_keep_selection_order_and_skip_unknown() {
        let mut question = one_choice();
        question.kind = QuestionType::MultipleChoice;
        let built = build_answer(
            &question,
            &Response::Choices { question: 1, options: vec![2, 7, 1] },
        )
        .unwrap();
        let Answer::OptionSet(selected) = &built.answer else {
            panic!("expected an option set, got {:?}", built.answer);
        };
        let ids: Vec<u32> = selected.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(answer_score(&built.answer), 1.0);
    }

    #[test]
    fn text_is_graded() {
        let question = Question {
            id: 2,
            topic: "Capital of Italy?".into(),
            kind: QuestionType::DetailedTextField,
            options: None,
            correct_answer: Some(TextAnswer::graded("Rome", 2.0)),
        };
        let built = build_answer(&question, &Response::Text { question: 2, text: "ROME".into() }).unwrap();
        assert_eq!(built.answer, Answer::Text(TextAnswer::graded("ROME", 2.0)));
    }

    #[test]
    fn pairs_score_only_correct_matches() {
        let built = build_answer(
            &matchmaking(),
            &Response::Pairs { question: 4, pairs: vec![(1, 2), (2, 2), (3, 1)] },
        )
        .unwrap();
        let Answer::Matches(lists) = &built.answer else {
            panic!("expected matches, got {:?}", built.answer);
        };
        assert_eq!(lists.left_list.len(), 2);
        assert_eq!(lists.left_list[0].score, Some(1.0));
        assert_eq!(lists.left_list[1].score, Some(0.0));
        assert_eq!(lists.right_list[0].label, "Madrid");
        assert_eq!(answer_score(&built.answer), 1.0);
    }

    #[test]
    fn mismatched_response_is_rejected() {
        let err = build_answer(&one_choice(), &Response::Text { question: 1, text: "Paris".into() })
            .unwrap_err();
        assert!(matches!(err, SurveyError::ResponseMismatch { id: 1, .. }));
        assert!(err.to_string().contains("text response"));
    }

    #[test]
    fn response_wire_format() {
        let response: Response =
            serde_json::from_str(r#"{"kind": "pairs", "question": 4, "pairs": [[1, 2]]}"#).unwrap();
        assert_eq!(response, Response::Pairs { question: 4, pairs: vec![(1, 2)] });
        assert_eq!(response.question_id(), 4);
    }
}
