//! OpenAI-compatible HTTP client.

use super::{OpenAiConfig, conversion, dto::ChatCompletionResponse};
use async_trait::async_trait;
use procdoc_core::{GenerateRequest, GenerateResponse};
use procdoc_error::{ModelsError, ModelsErrorKind, ModelsResult, ProcdocResult};
use procdoc_interface::{AudioClip, ProcdocDriver, Transcriber};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

/// Client for OpenAI-compatible chat completion and transcription APIs.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured and `OPENAI_API_KEY` is not set
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(model = %config.model(), api_base = %config.api_base()))]
    pub fn new(config: OpenAiConfig) -> ModelsResult<Self> {
        let api_key = match config.api_key() {
            Some(key) => key.clone(),
            None => std::env::var("OPENAI_API_KEY").map_err(|e| {
                ModelsError::new(ModelsErrorKind::MissingApiKey(format!(
                    "OPENAI_API_KEY not set: {}",
                    e
                )))
            })?,
        };

        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.config.api_base().trim_end_matches('/'), route)
    }

    async fn check_status(response: reqwest::Response) -> ModelsResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        Err(api_error(status, response.text().await))
    }
}

#[track_caller]
fn api_error(status: u16, body: Result<String, impl std::fmt::Display>) -> ModelsError {
    let message = match body {
        Ok(body) => body,
        Err(e) => format!("error body unreadable: {}", e),
    };
    ModelsError::new(ModelsErrorKind::ApiError { status, message })
}

#[async_trait]
impl ProcdocDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %self.config.model(), messages = req.messages().len()))]
    async fn generate(&self, req: &GenerateRequest) -> ProcdocResult<GenerateResponse> {
        let chat_request = conversion::to_chat_request(req, &self.config)?;

        let url = self.endpoint("chat/completions");
        debug!(url = %url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let response = Self::check_status(response).await?;

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::ResponseParse(format!(
                "Failed to parse chat completion: {}",
                e
            )))
        })?;

        if let Some(usage) = chat_response.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Chat completion received"
            );
        }

        conversion::from_chat_response(&chat_response).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[async_trait]
impl Transcriber for OpenAiClient {
    #[instrument(skip(self, clip), fields(model = %self.config.transcription_model(), bytes = clip.bytes().len()))]
    async fn transcribe(&self, clip: &AudioClip) -> ProcdocResult<String> {
        let part = Part::bytes(clip.bytes().clone())
            .file_name(clip.filename().clone())
            .mime_str(clip.mime())
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Unsupported(format!(
                    "Invalid audio MIME type {}: {}",
                    clip.mime(),
                    e
                )))
            })?;

        let form = Form::new()
            .text("model", self.config.transcription_model().clone())
            .text("response_format", "text")
            .part("file", part);

        let url = self.endpoint("audio/transcriptions");
        debug!(url = %url, "Sending transcription request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let response = Self::check_status(response).await?;

        let transcript = response.text().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::ResponseParse(format!(
                "Failed to read transcription: {}",
                e
            )))
        })?;

        Ok(transcript.trim().to_string())
    }
}
