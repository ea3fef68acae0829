use std::sync::Arc;

use quiz_core::model::{Question, Topic};
use tracing::{debug, info, warn};

use super::backend::{BackendRequest, GenerationBackend};
use super::config::GenerationConfig;
use super::decode::decode_questions;
use super::prompt::{build_prompt, response_schema};
use crate::error::QuizGenerationError;

/// Turns a topic into a validated question set.
#[derive(Clone)]
pub struct QuizGenerator {
    backend: Arc<dyn GenerationBackend>,
}

impl QuizGenerator {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Generate a fresh quiz for `topic`.
    ///
    /// Performs exactly one backend call; nothing is retried or cached.
    ///
    /// # Errors
    ///
    /// Returns `QuizGenerationError::MissingCredential` before any call when no
    /// key is configured, `EmptyResponse` when the service sends no text,
    /// `MalformedResponse` when the payload violates the question shape, and
    /// `Service`/`Network` for transport or upstream failures.
    pub async fn generate(
        &self,
        config: &GenerationConfig,
        topic: &Topic,
    ) -> Result<Vec<Question>, QuizGenerationError> {
        let api_key = config
            .credential()
            .ok_or(QuizGenerationError::MissingCredential)?;

        let request = BackendRequest {
            prompt: build_prompt(topic, &config.prompt),
            schema: response_schema(),
        };
        debug!(model = %config.model, %topic, "requesting quiz generation");

        let text = match self.backend.complete(config, api_key, &request).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(%topic, "generation service returned no content");
                return Err(QuizGenerationError::EmptyResponse);
            }
            Err(err) => {
                warn!(%topic, error = %err, "generation request failed");
                return Err(err);
            }
        };

        let questions = decode_questions(&text).map_err(|err| {
            warn!(%topic, error = %err, "rejected generated quiz");
            QuizGenerationError::from(err)
        })?;
        info!(%topic, count = questions.len(), "quiz generated");
        Ok(questions)
    }
}
