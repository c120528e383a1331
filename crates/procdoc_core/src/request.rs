//! Request and response types for generation.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// # Examples
///
/// ```
/// use procdoc_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user_text("Summarise the process")])
///     .temperature(Some(0.0_f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder, Getters)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Request holding the given messages and provider defaults for everything else.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }
}

/// Output produced by a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use procdoc_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::builder()
///     .outputs(vec![Output::Text("graph TD".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(response.text(), "graph TD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a new builder for `GenerateResponse`.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Response holding a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// All text outputs concatenated in order.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.as_str(),
            })
            .collect()
    }
}
