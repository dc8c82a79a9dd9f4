//! Built-in demo survey, used when no fixture is given.

use std::path::Path;

use anyhow::Result;

use crate::parser::{parse_fixture_str, FixtureFormat, SurveyFixture};

/// Demo survey with one question of every type and a pre-seeded answer.
pub const DEMO_FIXTURE_JSON: &str = r#"{
  "survey": {
    "id": 1,
    "title": "Geography warm-up",
    "description": "Five questions, one of each kind."
  },
  "questions": [
    {
      "id": 1,
      "topic": "What is the capital of France?",
      "type": "OneChoice",
      "options": [
        { "id": 1, "label": "Paris", "score": 1 },
        { "id": 2, "label": "Lyon", "score": 0 },
        { "id": 3, "label": "Marseille", "score": 0 }
      ]
    },
    {
      "id": 2,
      "topic": "Which city is the capital of Italy?",
      "type": "ShortTextField",
      "correctAnswer": { "text": "Rome", "score": 2 }
    },
    {
      "id": 3,
      "topic": "Which of these are rivers?",
      "type": "MultipleChoice",
      "options": [
        { "id": 1, "label": "Danube", "score": 1 },
        { "id": 2, "label": "Seine", "score": 1 },
        { "id": 3, "label": "Alps", "score": 0 }
      ]
    },
    {
      "id": 4,
      "topic": "Match each country to its capital",
      "type": "Matchmaking",
      "options": {
        "leftList": [
          { "id": 1, "label": "Spain", "relatedOptionId": 2, "score": 1 },
          { "id": 2, "label": "Portugal", "relatedOptionId": 1, "score": 1 }
        ],
        "rightList": [
          { "id": 1, "label": "Lisbon" },
          { "id": 2, "label": "Madrid" }
        ]
      }
    },
    {
      "id": 5,
      "topic": "Which place would you most like to visit, and why?",
      "type": "DetailedTextField"
    }
  ],
  "answers": [
    {
      "question": {
        "id": 1,
        "topic": "What is the capital of France?",
        "type": "OneChoice",
        "options": [
          { "id": 1, "label": "Paris", "score": 1 },
          { "id": 2, "label": "Lyon", "score": 0 },
          { "id": 3, "label": "Marseille", "score": 0 }
        ]
      },
      "answer": { "id": 2, "label": "Lyon", "score": 0 }
    }
  ]
}
"#;

/// Parse the demo survey.
pub fn demo_fixture() -> Result<SurveyFixture> {
    parse_fixture_str(DEMO_FIXTURE_JSON, FixtureFormat::Json, Path::new("demo.json"))
}
