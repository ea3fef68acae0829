use std::env;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_CURRICULUM: &str =
    "the Vietnamese general education programme (GDPT 2018) for lower secondary school, grades 6 to 9";
const DEFAULT_LANGUAGE: &str = "Vietnamese";

/// Audience and output language embedded in the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptSettings {
    pub curriculum: String,
    pub language: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            curriculum: DEFAULT_CURRICULUM.into(),
            language: DEFAULT_LANGUAGE.into(),
        }
    }
}

/// Settings for one `QuizGenerator::generate` call.
///
/// Passed in at call time; nothing here is process-global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub prompt: PromptSettings,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: DEFAULT_MODEL.into(),
            prompt: PromptSettings::default(),
        }
    }
}

impl GenerationConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `QUIZ_AI_BASE_URL` is not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GenerationConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the base URL does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank("QUIZ_AI_API_KEY").or_else(|| non_blank("API_KEY"));
        let base_url = match non_blank("QUIZ_AI_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => default_base_url(),
        };
        let model = non_blank("QUIZ_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let defaults = PromptSettings::default();
        let prompt = PromptSettings {
            curriculum: non_blank("QUIZ_CURRICULUM").unwrap_or(defaults.curriculum),
            language: non_blank("QUIZ_LANGUAGE").unwrap_or(defaults.language),
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            prompt,
        })
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `raw` does not parse.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// The configured credential, if it is present and not blank.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
    })
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL should be valid")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_env() {
        let config = GenerationConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url.as_str(), "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(config.prompt, PromptSettings::default());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = GenerationConfig::from_lookup(lookup(&[("QUIZ_AI_API_KEY", "   ")])).unwrap();
        assert_eq!(config.credential(), None);
    }

    #[test]
    fn falls_back_to_plain_api_key() {
        let config = GenerationConfig::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.credential(), Some("secret"));

        let config = GenerationConfig::from_lookup(lookup(&[
            ("API_KEY", "fallback"),
            ("QUIZ_AI_API_KEY", "primary"),
        ]))
        .unwrap();
        assert_eq!(config.credential(), Some("primary"));
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let err = GenerationConfig::from_lookup(lookup(&[("QUIZ_AI_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn overrides_are_read() {
        let config = GenerationConfig::from_lookup(lookup(&[
            ("QUIZ_AI_MODEL", "gemini-test"),
            ("QUIZ_LANGUAGE", "English"),
            ("QUIZ_AI_BASE_URL", "http://127.0.0.1:8080/v1"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.prompt.language, "English");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/v1");
    }
}
