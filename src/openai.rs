use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

const CHAT_MODEL: &str = "gpt-3.5-turbo";
const IMAGE_MODEL: &str = "dall-e-2";
const IMAGE_SIZE: &str = "1024x1024";
const STYLIST_PERSONA: &str =
    "You are a quirky, fashionable AI stylist that gives helpful and fun responses.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("provider response unusable: {0}")]
    EmptyResult(&'static str),
}

/// Thin client for the image-generation and chat-completion endpoints.
/// One attempt per call, no retry, no streaming.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        let base_url = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        Self::with_base_url(api_key, base_url)
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Requests exactly one square image for the given prompt and returns the
    /// hosted image URL.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/images/generations", self.base_url);
        let preview: String = prompt.chars().take(100).collect();
        info!(prompt_preview = %preview, "requesting image generation");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "prompt": prompt,
                "n": 1,
                "size": IMAGE_SIZE,
                "model": IMAGE_MODEL,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "image generation failed");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ImagesResponse = response.json().await?;
        let image_url = parsed.data.into_iter().next().and_then(|d| d.url);
        match image_url {
            Some(url) => {
                info!(image_url = %url, "image generated");
                Ok(url)
            }
            None => Err(ProviderError::EmptyResult("no image URL in response")),
        }
    }

    /// Single-turn chat completion under the stylist persona. No conversation
    /// history is retained server-side.
    pub async fn chat(&self, message: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": CHAT_MODEL,
                "messages": [
                    { "role": "system", "content": STYLIST_PERSONA },
                    { "role": "user", "content": message },
                ],
                "temperature": 0.7,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "chat completion failed");
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        match reply {
            Some(content) => Ok(content),
            None => Err(ProviderError::EmptyResult("no reply in response")),
        }
    }
}

// --- Response parsing helpers ---

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatMessage,
}

#[derive(Debug, Deserialize, Default)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}
