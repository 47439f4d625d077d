//! Generator configuration types, defaults, and resolution

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default output language requested from the model
pub const DEFAULT_LANGUAGE: &str = "Chinese";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Errors raised while resolving or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is required and must be non-empty")]
    MissingApiKey,

    #[error("temperature must be within 0.0..=1.0, got {0}")]
    TemperatureOutOfRange(f64),

    #[error("prompt template error: {0}")]
    Template(String),
}

/// Requested sentiment of the generated review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[default]
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Adjective interpolated into the prompt templates
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Requested length of the generated text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Adjective interpolated into the prompt templates
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::Short => "brief",
            Self::Medium => "moderate-length",
            Self::Long => "detailed",
        }
    }
}

/// Caller-supplied generator options
///
/// Only `api_key` is required; every other field falls back to a documented
/// default during [`GeneratorOptions::resolve`]. The struct deserializes from
/// kebab-case keys so callers can keep it in a config file if they want to —
/// the library itself never touches the filesystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorOptions {
    /// DeepSeek (or compatible provider) API key
    pub api_key: String,

    /// Model identifier, defaults to "deepseek-chat"
    pub model: Option<String>,

    /// API base URL, defaults to the DeepSeek endpoint
    pub base_url: Option<String>,

    /// Sentiment of the generated review, defaults to positive
    pub sentiment: Option<Sentiment>,

    /// Length of the generated text, defaults to medium
    pub length: Option<Length>,

    /// Output language requested from the model, defaults to Chinese
    pub language: Option<String>,

    /// Sampling temperature in 0.0..=1.0, defaults to 0.7
    pub temperature: Option<f64>,
}

impl GeneratorOptions {
    /// Create options holding only the required API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Merge with the documented defaults into a fully-concrete record
    ///
    /// Pure merge, no side effects. Fails fast on a missing credential or an
    /// out-of-range temperature so misconfiguration never reaches a remote
    /// call.
    pub fn resolve(self) -> Result<ResolvedOptions, ConfigError> {
        debug!(model = ?self.model, "GeneratorOptions::resolve: called");

        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigError::TemperatureOutOfRange(temperature));
        }

        Ok(ResolvedOptions {
            api_key: self.api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            sentiment: self.sentiment.unwrap_or_default(),
            length: self.length.unwrap_or_default(),
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            temperature,
        })
    }
}

/// Fully-defaulted, validated options shared by every call on one generator
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub sentiment: Sentiment,
    pub length: Length,
    pub language: String,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fills_defaults() {
        let resolved = GeneratorOptions::new("sk-test").resolve().unwrap();

        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.sentiment, Sentiment::Positive);
        assert_eq!(resolved.length, Length::Medium);
        assert_eq!(resolved.language, DEFAULT_LANGUAGE);
        assert_eq!(resolved.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_resolve_keeps_caller_values() {
        let options = GeneratorOptions {
            api_key: "sk-test".to_string(),
            model: Some("deepseek-reasoner".to_string()),
            base_url: Some("https://example.com".to_string()),
            sentiment: Some(Sentiment::Negative),
            length: Some(Length::Long),
            language: Some("English".to_string()),
            temperature: Some(0.2),
        };

        let resolved = options.resolve().unwrap();

        assert_eq!(resolved.model, "deepseek-reasoner");
        assert_eq!(resolved.base_url, "https://example.com");
        assert_eq!(resolved.sentiment, Sentiment::Negative);
        assert_eq!(resolved.length, Length::Long);
        assert_eq!(resolved.language, "English");
        assert_eq!(resolved.temperature, 0.2);
    }

    #[test]
    fn test_resolve_rejects_empty_api_key() {
        let result = GeneratorOptions::default().resolve();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_resolve_rejects_out_of_range_temperature() {
        let mut options = GeneratorOptions::new("sk-test");
        options.temperature = Some(1.5);
        assert!(matches!(
            options.resolve(),
            Err(ConfigError::TemperatureOutOfRange(_))
        ));

        let mut options = GeneratorOptions::new("sk-test");
        options.temperature = Some(-0.1);
        assert!(options.resolve().is_err());
    }

    #[test]
    fn test_enum_values_are_strict() {
        // Unknown enum values fail deserialization instead of silently
        // falling back to a default.
        let result: Result<Sentiment, _> = serde_json::from_str("\"enthusiastic\"");
        assert!(result.is_err());

        let result: Result<Length, _> = serde_json::from_str("\"huge\"");
        assert!(result.is_err());

        let sentiment: Sentiment = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_options_deserialize_kebab_case() {
        let yaml_ish = r#"{"api-key": "sk-test", "base-url": "https://example.com", "length": "short"}"#;
        let options: GeneratorOptions = serde_json::from_str(yaml_ish).unwrap();
        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.base_url, "https://example.com");
        assert_eq!(resolved.length, Length::Short);
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(Length::Short.adjective(), "brief");
        assert_eq!(Length::Medium.adjective(), "moderate-length");
        assert_eq!(Length::Long.adjective(), "detailed");
        assert_eq!(Sentiment::Positive.adjective(), "positive");
        assert_eq!(Sentiment::Negative.adjective(), "negative");
    }
}
