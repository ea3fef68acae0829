use std::fmt;

use crate::model::{Question, Topic};

/// Ticket minted for every accepted start; only the newest one is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work the caller must perform after a start was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub id: RequestId,
    pub topic: Topic,
}

/// Everything that can happen to a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    /// Replace the topic typed so far (idle only).
    EditTopic(String),
    /// Start generating a quiz for the stored topic.
    Start,
    GenerationSucceeded {
        request: RequestId,
        questions: Vec<Question>,
    },
    GenerationFailed {
        request: RequestId,
        message: String,
    },
    SelectAnswer(usize),
    Next,
    Previous,
    Reset,
}

impl QuizIntent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EditTopic(_) => "edit_topic",
            Self::Start => "start",
            Self::GenerationSucceeded { .. } => "generation_succeeded",
            Self::GenerationFailed { .. } => "generation_failed",
            Self::SelectAnswer(_) => "select_answer",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Reset => "reset",
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEffect {
    None,
    Generate(GenerationRequest),
}

impl QuizEffect {
    #[must_use]
    pub fn generation_request(&self) -> Option<&GenerationRequest> {
        match self {
            Self::Generate(request) => Some(request),
            Self::None => None,
        }
    }
}
