use async_trait::async_trait;
use serde_json::Value;

use super::config::GenerationConfig;
use crate::error::QuizGenerationError;

/// One outbound call to a text generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub prompt: String,
    pub schema: Value,
}

/// Transport seam between `QuizGenerator` and the external service.
///
/// Implementations return `Ok(None)` when the service answered without a body.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn complete(
        &self,
        config: &GenerationConfig,
        api_key: &str,
        request: &BackendRequest,
    ) -> Result<Option<String>, QuizGenerationError>;
}
