//! Generative model and transcription providers for procdoc.
//!
//! Provides an OpenAI-compatible client that implements both
//! [`ProcdocDriver`](procdoc_interface::ProcdocDriver) (chat completions with
//! inline images) and [`Transcriber`](procdoc_interface::Transcriber)
//! (Whisper-style audio transcription). Any server exposing the same
//! `/chat/completions` and `/audio/transcriptions` routes can be targeted by
//! changing the API base.
//!
//! ```no_run
//! use procdoc_interface::{ProcdocDriver, text_request};
//! use procdoc_models::{OpenAiClient, OpenAiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(OpenAiConfig::default())?;
//! let response = client.generate(&text_request("Hello")).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatCompletionRequest, ChatCompletionResponse, OpenAiClient, OpenAiConfig,
    OpenAiConfigBuilder,
};
