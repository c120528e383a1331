//! Type conversions between procdoc and chat completion types.

use super::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatContent, ChatMessage, ChatRole,
    ContentPart, ImageUrl,
};
use super::OpenAiConfig;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use procdoc_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Message, Role};
use procdoc_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Converts a procdoc request into a chat completion request.
///
/// Request-level model, temperature and token limit win over the client defaults.
pub fn to_chat_request(
    request: &GenerateRequest,
    config: &OpenAiConfig,
) -> ModelsResult<ChatCompletionRequest> {
    let messages = request
        .messages()
        .iter()
        .map(to_chat_message)
        .collect::<ModelsResult<Vec<_>>>()?;

    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| config.model().clone());
    let temperature = request.temperature().or(Some(*config.temperature()));
    let max_tokens = request.max_tokens().or(*config.max_tokens());

    ChatCompletionRequest::builder()
        .model(model)
        .messages(messages)
        .temperature(temperature)
        .max_tokens(max_tokens)
        .build()
        .map_err(|e| {
            ModelsError::new(ModelsErrorKind::Builder(format!(
                "Failed to build chat completion request: {}",
                e
            )))
        })
}

/// Converts a chat completion response into a procdoc response.
///
/// Only the first choice is used. A missing choice or missing content is an error.
pub fn from_chat_response(response: &ChatCompletionResponse) -> ModelsResult<GenerateResponse> {
    let content = response
        .choices()
        .first()
        .and_then(|choice| choice.message().content().clone())
        .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse))?;

    Ok(GenerateResponse::from_text(content))
}

fn to_chat_message(message: &Message) -> ModelsResult<ChatMessage> {
    let role = match message.role() {
        Role::System => ChatRole::System,
        Role::User => ChatRole::User,
        Role::Assistant => ChatRole::Assistant,
    };

    let content = match message.content().as_slice() {
        [Input::Text(text)] => ChatContent::Text(text.clone()),
        inputs => ChatContent::Parts(
            inputs
                .iter()
                .map(to_content_part)
                .collect::<ModelsResult<Vec<_>>>()?,
        ),
    };

    Ok(ChatMessage::new(role, content))
}

fn to_content_part(input: &Input) -> ModelsResult<ContentPart> {
    match input {
        Input::Text(text) => Ok(ContentPart::Text { text: text.clone() }),
        Input::Image { mime, source } => {
            let mime = mime.as_deref().unwrap_or("image/jpeg");
            if !mime.starts_with("image/") {
                return Err(ModelsError::new(ModelsErrorKind::Unsupported(format!(
                    "image part with MIME type {}",
                    mime
                ))));
            }
            let data = match source {
                MediaSource::Base64(encoded) => encoded.clone(),
                MediaSource::Binary(bytes) => STANDARD.encode(bytes),
            };
            Ok(ContentPart::ImageUrl {
                image_url: ImageUrl::new(format!("data:{};base64,{}", mime, data)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procdoc_core::Output;

    fn config() -> OpenAiConfig {
        OpenAiConfig::builder()
            .model("gpt-4o")
            .temperature(0.0_f32)
            .build()
            .unwrap()
    }

    #[test]
    fn test_text_only_message_serializes_as_string() {
        let request = GenerateRequest::from_messages(vec![Message::user_text("Describe it")]);
        let chat = to_chat_request(&request, &config()).unwrap();
        let json = serde_json::to_value(&chat).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Describe it");
        assert_eq!(json["temperature"], 0.0);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_image_becomes_data_url_part() {
        let message = Message::new(
            Role::User,
            vec![
                Input::Text("What is on screen?".to_string()),
                Input::Image {
                    mime: Some("image/png".to_string()),
                    source: MediaSource::Binary(vec![1, 2, 3]),
                },
            ],
        );
        let request = GenerateRequest::from_messages(vec![message]);
        let chat = to_chat_request(&request, &config()).unwrap();
        let json = serde_json::to_value(&chat).unwrap();

        let parts = &json["messages"][0]["content"];
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/png;base64,AQID");
    }

    #[test]
    fn test_request_overrides_win() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::user_text("hi")])
            .model(Some("gpt-4o-mini".to_string()))
            .max_tokens(Some(64_u32))
            .build()
            .unwrap();
        let chat = to_chat_request(&request, &config()).unwrap();

        assert_eq!(chat.model(), "gpt-4o-mini");
        assert_eq!(*chat.max_tokens(), Some(64));
    }

    #[test]
    fn test_response_uses_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"graph TD"},"finish_reason":"stop"}],
                "usage":{"prompt_tokens":10,"completion_tokens":3}}"#,
        )
        .unwrap();

        let converted = from_chat_response(&response).unwrap();
        assert_eq!(converted.outputs(), &vec![Output::Text("graph TD".to_string())]);
    }

    #[test]
    fn test_missing_content_is_empty_response() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = from_chat_response(&response).unwrap_err();
        assert_eq!(err.kind, ModelsErrorKind::EmptyResponse);
    }
}
