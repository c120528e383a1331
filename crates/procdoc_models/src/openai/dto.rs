//! Chat completion data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat message role on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Image reference inside a content part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageUrl {
    /// `https://` or `data:` URL
    url: String,
}

impl ImageUrl {
    /// Wrap a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// One part of a multimodal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text part
    Text {
        /// The text
        text: String,
    },
    /// Image part
    ImageUrl {
        /// Where the image lives
        image_url: ImageUrl,
    },
}

/// Message content: plain string for text-only messages, parts otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatContent {
    /// Text-only content
    Text(String),
    /// Multimodal content
    Parts(Vec<ContentPart>),
}

/// A message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: ChatContent,
}

impl ChatMessage {
    /// Create a chat message.
    pub fn new(role: ChatRole, content: ChatContent) -> Self {
        Self { role, content }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Completion token limit
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ResponseMessage {
    /// Generated text, absent for refusals or tool calls
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Choice {
    /// Generated message
    message: ResponseMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Usage {
    /// Prompt tokens consumed
    #[serde(default)]
    prompt_tokens: u32,
    /// Completion tokens generated
    #[serde(default)]
    completion_tokens: u32,
}

/// Chat completion response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices (one unless `n` was requested)
    choices: Vec<Choice>,
    /// Token usage statistics (if available)
    #[serde(default)]
    usage: Option<Usage>,
}
