//! Small helpers for single-turn prompts.

use crate::{ProcdocDriver, SampledImage};
use procdoc_core::{GenerateRequest, Input, MediaSource, Message, Role};
use procdoc_error::ProcdocResult;

/// Single user message carrying only text.
pub fn text_request(prompt: impl Into<String>) -> GenerateRequest {
    GenerateRequest::from_messages(vec![Message::user_text(prompt)])
}

/// Single user message carrying text followed by one image.
pub fn image_request(prompt: impl Into<String>, image: &SampledImage) -> GenerateRequest {
    let content = vec![
        Input::Text(prompt.into()),
        Input::Image {
            mime: Some(image.mime().clone()),
            source: MediaSource::Binary(image.bytes().clone()),
        },
    ];
    GenerateRequest::from_messages(vec![Message::new(Role::User, content)])
}

/// Run a request and return its text output unchanged.
pub async fn generate_text<D>(driver: &D, request: &GenerateRequest) -> ProcdocResult<String>
where
    D: ProcdocDriver + ?Sized,
{
    let response = driver.generate(request).await?;
    Ok(response.text())
}
