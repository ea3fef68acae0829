//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Coarse classification of generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    MissingCredential,
    EmptyResponse,
    MalformedResponse,
    NetworkOrServiceFailure,
}

/// Why a generated payload was not accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedResponse {
    #[error("response is not a valid question list: {detail}")]
    Json { detail: String },
    #[error("expected {expected} questions, received {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("question {position} is invalid: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted by `QuizGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizGenerationError {
    #[error("no API credential is configured")]
    MissingCredential,
    #[error("the generation service returned an empty response")]
    EmptyResponse,
    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),
    #[error("generation request failed with status {status}: {message}")]
    Service {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl QuizGenerationError {
    #[must_use]
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            Self::MissingCredential => GenerationErrorKind::MissingCredential,
            Self::EmptyResponse => GenerationErrorKind::EmptyResponse,
            Self::MalformedResponse(_) => GenerationErrorKind::MalformedResponse,
            Self::Service { .. } | Self::Network(_) => GenerationErrorKind::NetworkOrServiceFailure,
        }
    }

    /// Text suitable for showing next to the topic form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            GenerationErrorKind::MissingCredential => {
                "No API key found. Set QUIZ_AI_API_KEY and restart the app.".to_string()
            }
            GenerationErrorKind::EmptyResponse => {
                "The AI service returned no data. Please try again.".to_string()
            }
            GenerationErrorKind::MalformedResponse => {
                "The AI service returned an unusable quiz. Please try again.".to_string()
            }
            GenerationErrorKind::NetworkOrServiceFailure => match self {
                Self::Service { status, .. }
                    if *status == reqwest::StatusCode::UNAUTHORIZED
                        || *status == reqwest::StatusCode::FORBIDDEN =>
                {
                    "The API key was rejected. Check your configuration.".to_string()
                }
                _ => "Could not reach the AI service. Please try again.".to_string(),
            },
        }
    }
}

/// Errors emitted while reading generation settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL: {raw}")]
    InvalidBaseUrl { raw: String },
}
