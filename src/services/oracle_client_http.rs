//! Oracle client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, OracleApiConfig};
use crate::ports::{CompletionRequest, OracleClient};

/// Environment variable holding the oracle API key.
pub const API_KEY_ENV_VAR: &str = "PAGEFORGE_API_KEY";

const DEFAULT_STATUS_MESSAGE: &str = "Oracle API request failed";

/// HTTP transport for a chat-completions style oracle.
///
/// This client performs a single request per call. Retry behavior is
/// implemented by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpOracleClient {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpOracleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOracleClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpOracleClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &OracleApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::OracleApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the environment variable with custom configuration.
    pub fn from_env_with_config(config: &OracleApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV_VAR.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ChatRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| AppError::OracleApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ChatResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::OracleApi {
                    message: format!("Failed to parse response envelope: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|content| !content.trim().is_empty());

            return content.ok_or_else(|| AppError::OracleApi {
                message: "No completion content in response".into(),
                status: Some(status.as_u16()),
            });
        }

        let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if let Some(value) = retry_after_ms {
            message.push_str(&format!(" (retry_after_ms={})", value));
        }

        Err(AppError::OracleApi { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl OracleClient for HttpOracleClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let api_request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat { format_type: "json_object" },
        };

        self.send_request(&api_request)
    }
}
