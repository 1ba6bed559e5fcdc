/// OpenAI chat-completions client
///
/// Single point of entry for text generation. One single-turn request with
/// fixed parameters; no retry. The credential is checked for presence before
/// anything touches the network, because its absence is an actionable
/// configuration problem rather than a transport failure.
use crate::error::{AppError, AppResult};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed generation parameters. These mirror what the product ships with and
/// are deliberately not computed per request.
const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f64 = 0.7;
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const MISSING_KEY_HINT: &str =
    "Add OPENAI_API_KEY to your environment, .env file, or secrets file.";

/// Trait for text-generation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one user-role prompt and returns the generated text verbatim.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Error body shape returned by the OpenAI API.
#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        // Precondition: fail before any request is even built.
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingCredential {
            name: "OPENAI_API_KEY",
            hint: MISSING_KEY_HINT,
        })?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(AppError::GenerationTransport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the API's own error message when the body parses.
            let message = serde_json::from_str::<UpstreamError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AppError::GenerationApi {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(AppError::GenerationTransport)?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::GenerationApi {
                status: status.as_u16(),
                message: "response contained no choices".to_string(),
            })?;

        tracing::info!(
            model = MODEL,
            output_chars = content.len(),
            provider = "openai",
            "Generation completed"
        );

        Ok(content)
    }
}
