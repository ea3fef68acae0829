use quiz_core::model::{OPTION_COUNT, Topic};
use serde_json::{Value, json};

use super::config::PromptSettings;

/// Number of questions every generated quiz must contain.
pub const QUESTION_COUNT: usize = 10;

/// Difficulty levels requested from the generator, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Applied,
    Advanced,
}

impl DifficultyBand {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Applied, Self::Advanced];

    /// Questions requested at this level.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium => 3,
            Self::Applied => 2,
            Self::Advanced => 1,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "easy (recall)",
            Self::Medium => "medium (understanding)",
            Self::Applied => "applied (routine application)",
            Self::Advanced => "advanced (complex application)",
        }
    }
}

/// Instruction text sent to the generator for `topic`.
#[must_use]
pub fn build_prompt(topic: &Topic, settings: &PromptSettings) -> String {
    let bands = DifficultyBand::ALL
        .iter()
        .map(|band| format!("{} {}", band.count(), band.description()))
        .collect::<Vec<_>>()
        .join(", ");
    let last_index = OPTION_COUNT - 1;
    let PromptSettings {
        curriculum,
        language,
    } = settings;

    format!(
        "You are an experienced secondary-school mathematics teacher.
Create {QUESTION_COUNT} multiple-choice questions on the topic: \"{topic}\".

Requirements:
1. The content must follow {curriculum}.
2. Each question has exactly {OPTION_COUNT} options and exactly one correct answer.
3. Difficulty distribution: {bands}.
4. Write in standard {language}, with readable math notation (for example x^2 for x squared, sqrt(x) for a square root).
5. Give a detailed worked explanation for every question.
6. Return a JSON array of objects with the fields question (string), options (array of {OPTION_COUNT} strings), correctAnswerIndex (integer 0-{last_index}) and explanation (string)."
    )
}

/// Response-shape constraint sent alongside the prompt.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The math question text",
                },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": format!("{OPTION_COUNT} answer options"),
                },
                "correctAnswerIndex": {
                    "type": "INTEGER",
                    "description": format!("Index of the correct option (0-{})", OPTION_COUNT - 1),
                },
                "explanation": {
                    "type": "STRING",
                    "description": "Detailed worked solution",
                },
            },
            "required": ["question", "options", "correctAnswerIndex", "explanation"],
        },
    })
}
