use std::sync::Arc;

use quiz_core::{GenerationRequest, QuizEffect, QuizIntent, QuizState, TransitionError};
use tracing::{debug, info, warn};

use crate::generation::{GenerationBackend, GenerationConfig, QuizGenerator};

/// Orchestrates intents against a `QuizState` and runs requested generations.
#[derive(Clone)]
pub struct QuizLoopService {
    generator: QuizGenerator,
    config: GenerationConfig,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(generator: QuizGenerator, config: GenerationConfig) -> Self {
        Self { generator, config }
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn GenerationBackend>, config: GenerationConfig) -> Self {
        Self::new(QuizGenerator::new(backend), config)
    }

    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.config.credential().is_some()
    }

    /// Run one generation and turn its outcome into the completion intent.
    pub async fn run(&self, request: GenerationRequest) -> QuizIntent {
        let GenerationRequest { id, topic } = request;
        info!(request = %id, %topic, "generating quiz");
        match self.generator.generate(&self.config, &topic).await {
            Ok(questions) => QuizIntent::GenerationSucceeded {
                request: id,
                questions,
            },
            Err(err) => {
                warn!(request = %id, kind = ?err.kind(), error = %err, "quiz generation failed");
                QuizIntent::GenerationFailed {
                    request: id,
                    message: err.user_message(),
                }
            }
        }
    }

    /// Apply `intent` to `state`, logging rejected intents.
    ///
    /// # Errors
    ///
    /// Propagates the `TransitionError` from `QuizState::apply`.
    pub fn dispatch(
        &self,
        state: &mut QuizState,
        intent: QuizIntent,
    ) -> Result<QuizEffect, TransitionError> {
        let name = intent.name();
        match state.apply(intent) {
            Ok(effect) => {
                debug!(intent = name, status = %state.status(), "intent applied");
                Ok(effect)
            }
            Err(err @ TransitionError::StaleResponse { .. }) => {
                info!(intent = name, error = %err, "discarding stale generation result");
                Err(err)
            }
            Err(err) => {
                debug!(intent = name, error = %err, "intent rejected");
                Err(err)
            }
        }
    }

    /// Apply `intent` and, when it asks for generation, await and apply the result.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` if `intent` itself is rejected.
    pub async fn drive(
        &self,
        state: &mut QuizState,
        intent: QuizIntent,
    ) -> Result<(), TransitionError> {
        if let QuizEffect::Generate(request) = self.dispatch(state, intent)? {
            let completion = self.run(request).await;
            // The request was just issued, so it is still the pending one.
            self.dispatch(state, completion)?;
        }
        Ok(())
    }
}
