use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::backend::{BackendRequest, GenerationBackend};
use super::config::GenerationConfig;
use crate::error::QuizGenerationError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// `GenerationBackend` for the Gemini `generateContent` endpoint.
#[derive(Clone, Default)]
pub struct GeminiBackend {
    client: Client,
}

impl GeminiBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn complete(
        &self,
        config: &GenerationConfig,
        api_key: &str,
        request: &BackendRequest,
    ) -> Result<Option<String>, QuizGenerationError> {
        let url = endpoint(config);
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json",
                response_schema: &request.schema,
            },
        };

        debug!(%url, "sending generateContent request");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuizGenerationError::Service {
                status,
                message: error_message(&body),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.into_text())
    }
}

fn endpoint(config: &GenerationConfig) -> String {
    format!(
        "{}/models/{}:generateContent",
        config.base_url.as_str().trim_end_matches('/'),
        config.model
    )
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationSettings<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, joined; `None` when there is none.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
