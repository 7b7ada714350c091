//! Client for the hosted vision-language model.
//!
//! The relay only needs one capability from the model: given a system prompt,
//! an instruction and an image reference, return the free-text reply. That
//! capability is the `VisionModel` trait. `GatewayClient` implements it against
//! an OpenAI-compatible chat-completions endpoint; tests plug in stubs.

use crate::config::RelayConfig;
use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything the model is asked for a single image.
#[derive(Debug, Clone, Copy)]
pub struct VisionPrompt<'a> {
    pub system: &'a str,
    pub instruction: &'a str,
    /// Data URI (or URL) of the photo.
    pub image_url: &'a str,
}

/// Failures talking to the model, already classified for the relay.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UpstreamError {
    #[error("LOVABLE_API_KEY not configured")]
    MissingCredential,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Service usage limit reached. Please add credits.")]
    QuotaExceeded,
    #[error("Inference service error: {0}")]
    Status(u16),
    #[error("Inference service unreachable: {0}")]
    Transport(String),
    #[error("No content in model response")]
    EmptyReply,
}

/// Maps a non-success upstream status to its error.
pub fn classify_status(status: StatusCode) -> UpstreamError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => UpstreamError::QuotaExceeded,
        other => UpstreamError::Status(other.as_u16()),
    }
}

#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Sends one prompt and returns the model's text reply. Exactly one
    /// upstream attempt is made.
    async fn complete(&self, prompt: &VisionPrompt<'_>) -> Result<String, UpstreamError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

fn build_request<'a>(model: &'a str, temperature: f32, prompt: &VisionPrompt<'a>) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: MessageContent::Text(prompt.system),
            },
            ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: prompt.instruction,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: prompt.image_url,
                        },
                    },
                ]),
            },
        ],
        temperature,
    }
}

/// OpenAI-compatible chat-completions client authenticated with a bearer token.
pub struct GatewayClient {
    client: Client,
    url: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl GatewayClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.gateway_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl VisionModel for GatewayClient {
    async fn complete(&self, prompt: &VisionPrompt<'_>) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingCredential)?;
        let body = build_request(&self.model, self.temperature, prompt);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("Model API error: {} {}", status, error_body);
            return Err(classify_status(status));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(UpstreamError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_system_and_multimodal_user_turn() {
        let prompt = VisionPrompt {
            system: "You are an expert.",
            instruction: "Analyze this image.",
            image_url: "data:image/png;base64,AAAA",
        };
        let body = serde_json::to_value(build_request("google/gemini-2.5-flash", 0.25, &prompt))
            .unwrap();

        assert_eq!(
            body,
            json!({
                "model": "google/gemini-2.5-flash",
                "messages": [
                    { "role": "system", "content": "You are an expert." },
                    {
                        "role": "user",
                        "content": [
                            { "type": "text", "text": "Analyze this image." },
                            { "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } }
                        ]
                    }
                ],
                "temperature": 0.25
            })
        );
    }

    #[test]
    fn capacity_statuses_are_classified() {
        assert_eq!(classify_status(StatusCode::TOO_MANY_REQUESTS), UpstreamError::RateLimited);
        assert_eq!(classify_status(StatusCode::PAYMENT_REQUIRED), UpstreamError::QuotaExceeded);
        assert_eq!(classify_status(StatusCode::BAD_GATEWAY), UpstreamError::Status(502));
        assert_ne!(
            UpstreamError::RateLimited.to_string(),
            UpstreamError::QuotaExceeded.to_string()
        );
    }

    #[test]
    fn reply_content_is_read_from_first_choice() {
        let chat: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"disease\":\"x\"}" } }]
        }))
        .unwrap();
        let content = chat.choices.into_iter().next().and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("{\"disease\":\"x\"}"));
    }

    #[actix_web::test]
    async fn missing_credential_fails_before_any_request() {
        let client = GatewayClient::new(&RelayConfig::default());
        let prompt = VisionPrompt {
            system: "s",
            instruction: "i",
            image_url: "data:image/png;base64,AAAA",
        };
        assert_eq!(client.complete(&prompt).await, Err(UpstreamError::MissingCredential));
    }
}
