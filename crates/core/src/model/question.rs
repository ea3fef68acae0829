use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("expected 4 options, found {found}")]
    OptionCount { found: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {index} is out of range")]
    CorrectIndexOutOfRange { index: i64 },

    #[error("explanation cannot be empty")]
    EmptyExplanation,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Immutable once built: the option count and the correct index are checked in
/// [`Question::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    question: String,
    options: [String; OPTION_COUNT],
    correct_answer_index: usize,
    explanation: String,
}

impl Question {
    /// Build a question from raw parts, trimming every text field.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when any text is blank, the option count is not
    /// [`OPTION_COUNT`], or the correct index does not point at an option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = question.into().trim().to_string();
        if question.is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let found = options.len();
        let options: [String; OPTION_COUNT] = options
            .into_iter()
            .map(|option| option.trim().to_string())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| QuestionError::OptionCount { found })?;
        if let Some(index) = options.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyOption { index });
        }

        if correct_answer_index >= OPTION_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: i64::try_from(correct_answer_index).unwrap_or(i64::MAX),
            });
        }

        let explanation = explanation.into().trim().to_string();
        if explanation.is_empty() {
            return Err(QuestionError::EmptyExplanation);
        }

        Ok(Self {
            question,
            options,
            correct_answer_index,
            explanation,
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer_index]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }

    /// Returns true if `index` names one of this question's options.
    #[must_use]
    pub fn is_valid_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

/// Display letter for an option position (`0 -> 'A'`).
#[must_use]
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

/// Unvalidated wire form of a [`Question`].
///
/// Decoders read this first and convert with `Question::try_from`, which keeps
/// the typed [`QuestionError`] of a rejected entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_answer_index: i64,
    explanation: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let index = usize::try_from(record.correct_answer_index).map_err(|_| {
            QuestionError::CorrectIndexOutOfRange {
                index: record.correct_answer_index,
            }
        })?;
        Self::new(record.question, record.options, index, record.explanation)
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            question: question.question,
            options: question.options.into(),
            correct_answer_index: i64::try_from(question.correct_answer_index).unwrap_or(0),
            explanation: question.explanation,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
