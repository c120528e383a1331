//! OpenAI-compatible API integration.

mod client;
mod config;
mod conversion;
mod dto;

pub use client::OpenAiClient;
pub use config::{OpenAiConfig, OpenAiConfigBuilder};
pub use dto::{ChatCompletionRequest, ChatCompletionResponse};
