use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{ChatClient, ClientFactory};
use crate::domain::{ChatModel, DomainError};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const MISSING_KEY_MESSAGE: &str = "GROQ_API_KEY is not set in environment.";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-style error envelope: `{"error": {"message": "..."}}`.
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// HTTP client for Groq's chat-completion endpoint.
///
/// Each call sends exactly one `user` message; earlier turns of the
/// conversation are never included. No retries and no timeout beyond the
/// HTTP client's default.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    /// Fails with [`DomainError::Configuration`] when `api_key` is empty or blank.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_http_client(reqwest::Client::new(), api_key, base_url)
    }

    pub fn with_http_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let api_key: String = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DomainError::configuration(MISSING_KEY_MESSAGE));
        }

        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);

        Ok(Self {
            client,
            api_key,
            url,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Pull the provider's message out of an error body, falling back to the raw text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, model: ChatModel, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: model.as_str(),
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("GroqClient: POST {} model={}", self.url, model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::invocation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::invocation(format!(
                "Groq API returned {status}: {}",
                Self::error_message(&body)
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::invocation(format!("failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::invocation("response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| DomainError::invocation("first choice has no message content"))
    }
}

/// Builds a [`GroqClient`] per submission from the resolved credential.
///
/// | Variable        | Default                       | Purpose               |
/// |-----------------|-------------------------------|-----------------------|
/// | `GROQ_API_KEY`  | none (required)               | Bearer credential     |
/// | `GROQ_BASE_URL` | `https://api.groq.com/openai` | API root override     |
pub struct GroqClientFactory {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GroqClientFactory {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Read the credential from the process environment. A missing key is not
    /// an error here; it surfaces from [`ClientFactory::create`].
    pub fn from_env() -> Self {
        let key = std::env::var(API_KEY_VAR).ok();
        let base = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(key, base)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ClientFactory for GroqClientFactory {
    fn create(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        let key = self
            .api_key
            .clone()
            .ok_or_else(|| DomainError::configuration(MISSING_KEY_MESSAGE))?;
        let client = GroqClient::with_http_client(self.http.clone(), key, self.base_url.clone())?;
        Ok(Arc::new(client))
    }
}
