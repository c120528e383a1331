//! Client settings.

use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Default OpenAI API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Settings for [`OpenAiClient`](crate::OpenAiClient).
///
/// # Examples
///
/// ```
/// use procdoc_models::OpenAiConfig;
///
/// let config = OpenAiConfig::builder()
///     .model("gpt-4o-mini")
///     .temperature(0.2_f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gpt-4o-mini");
/// assert_eq!(config.transcription_model(), "whisper-1");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
#[builder(setter(into), default)]
pub struct OpenAiConfig {
    /// API base URL without trailing slash
    api_base: String,
    /// API key; falls back to `OPENAI_API_KEY` when absent
    #[builder(setter(strip_option))]
    api_key: Option<String>,
    /// Chat model used for every generative call
    model: String,
    /// Default sampling temperature
    temperature: f32,
    /// Default completion token limit
    #[builder(setter(strip_option))]
    max_tokens: Option<u32>,
    /// Model used for audio transcription
    transcription_model: String,
    /// Per-request timeout
    timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new builder for `OpenAiConfig`.
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            model: "gpt-4o".to_string(),
            temperature: 0.0,
            max_tokens: None,
            transcription_model: "whisper-1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}
