//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig, PromptPayload};
use crate::ports::{AnswerClient, GenerationError};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// Environment variable holding the API key, read once at construction.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP transport for the Gemini generateContent API.
///
/// Performs a single request per call; there is no retry or cancellation
/// path. Failures surface as `GenerationError` so callers choose what to
/// show the user.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let endpoint = generate_content_endpoint(config)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, GenerationError> {
        tracing::debug!(endpoint = %self.endpoint, "sending generation request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| GenerationError::Transport {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| GenerationError::Transport {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let text = api_response.answer_text();
            if text.trim().is_empty() {
                return Err(GenerationError::EmptyAnswer);
            }
            return Ok(text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
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

        Err(GenerationError::Transport { message, status: Some(status.as_u16()) })
    }
}

fn generate_content_endpoint(config: &GeminiApiConfig) -> Result<Url, AppError> {
    let raw = format!(
        "{}/models/{}:generateContent",
        config.api_url.trim_end_matches('/'),
        config.model
    );
    Url::parse(&raw)
        .map_err(|e| AppError::Configuration(format!("Invalid Gemini endpoint '{}': {}", raw, e)))
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<RequestContent>,
}

impl ApiRequest {
    fn from_prompt(text: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: text.to_string() }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl ApiResponse {
    /// Text of the first candidate, with multi-part answers concatenated.
    fn answer_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content.parts.iter().map(|part| part.text.as_str()).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
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

impl AnswerClient for HttpGeminiClient {
    fn generate(&self, payload: &PromptPayload) -> Result<String, GenerationError> {
        self.send_request(&ApiRequest::from_prompt(&payload.text))
    }
}
