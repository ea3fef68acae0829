use std::fmt;

use thiserror::Error;

/// Upper bound on topic length, counted in characters.
pub const MAX_TOPIC_CHARS: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic cannot be empty")]
    Blank,

    #[error("topic is too long ({len} characters, max 200)")]
    TooLong { len: usize },
}

/// A trimmed, non-blank subject used to seed quiz generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// # Errors
    ///
    /// Returns `TopicError::Blank` for empty or whitespace-only input and
    /// `TopicError::TooLong` past [`MAX_TOPIC_CHARS`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TopicError::Blank);
        }
        let len = trimmed.chars().count();
        if len > MAX_TOPIC_CHARS {
            return Err(TopicError::TooLong { len });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
