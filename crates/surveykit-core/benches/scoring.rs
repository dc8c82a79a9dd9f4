use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value;

use surveykit_core::model::{
    Answer, AnswerToQuestion, MatchLists, Question, QuestionOption, QuestionType, TextAnswer,
};
use surveykit_core::scoring::{compute_score, compute_score_untyped, grade_text_answer};

fn make_answers(n: u32) -> Vec<AnswerToQuestion> {
    (1..=n)
        .map(|id| {
            let (kind, answer) = match id % 4 {
                0 => (
                    QuestionType::OneChoice,
                    Answer::Choice(QuestionOption::new(1, "a").with_score(1.0)),
                ),
                1 => (
                    QuestionType::ShortTextField,
                    Answer::Text(TextAnswer::graded("paris", 2.0)),
                ),
                2 => (
                    QuestionType::Matchmaking,
                    Answer::Matches(MatchLists {
                        left_list: vec![
                            QuestionOption::new(1, "x").with_score(1.0),
                            QuestionOption::new(2, "y"),
                        ],
                        right_list: vec![QuestionOption::new(1, "z").with_score(9.0)],
                    }),
                ),
                _ => (
                    QuestionType::MultipleChoice,
                    Answer::OptionSet(vec![
                        QuestionOption::new(1, "a").with_score(1.0),
                        QuestionOption::new(2, "b").with_score(0.5),
                    ]),
                ),
            };
            AnswerToQuestion::new(Question::new(id, format!("Question {id}"), kind), answer)
        })
        .collect()
}

fn bench_compute_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_score");

    for n in [10u32, 100, 1000] {
        let answers = make_answers(n);
        group.bench_function(format!("typed n={n}"), |b| {
            b.iter(|| compute_score(black_box(&answers)))
        });

        let raw: Vec<Value> = answers
            .iter()
            .map(|a| serde_json::to_value(a).unwrap())
            .collect();
        group.bench_function(format!("untyped n={n}"), |b| {
            b.iter(|| compute_score_untyped(black_box(&raw)))
        });
    }

    group.finish();
}

fn bench_grade_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_text_answer");
    let mut question = Question::new(1, "Capital of France?", QuestionType::ShortTextField);
    question.correct_answer = Some(TextAnswer::graded("Paris", 3.0));

    group.bench_function("match", |b| {
        b.iter(|| grade_text_answer(black_box(&question), black_box("PARIS")))
    });

    group.bench_function("miss", |b| {
        b.iter(|| grade_text_answer(black_box(&question), black_box("Lyon")))
    });

    group.finish();
}

criterion_group!(benches, bench_compute_score, bench_grade_text);
criterion_main!(benches);
