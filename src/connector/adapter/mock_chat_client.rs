use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatClient, ClientFactory};
use crate::domain::{ChatModel, DomainError};

enum Reply {
    Echo,
    Fixed(String),
    Fail(String),
}

/// Offline [`ChatClient`]: answers deterministically without any network and
/// records every request it receives.
pub struct MockChatClient {
    reply: Reply,
    requests: Mutex<Vec<(ChatModel, String)>>,
}

impl MockChatClient {
    /// Answers with `[<model>] <prompt>`.
    pub fn new() -> Self {
        Self::with_reply(Reply::Echo)
    }

    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fixed(answer.into()))
    }

    /// Every call fails with an invocation error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(model, prompt)` of every call so far, oldest first.
    pub fn requests(&self) -> Vec<(ChatModel, String)> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, model: ChatModel, prompt: &str) -> Result<String, DomainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((model, prompt.to_string()));
        }
        debug!("MockChatClient: {} <- {} chars", model, prompt.len());

        match &self.reply {
            Reply::Echo => Ok(format!("[{}] {}", model, prompt)),
            Reply::Fixed(answer) => Ok(answer.clone()),
            Reply::Fail(message) => Err(DomainError::invocation(message.clone())),
        }
    }
}

/// Hands out a shared [`MockChatClient`], or fails like a missing credential.
pub struct MockClientFactory {
    client: Option<Arc<MockChatClient>>,
    created: AtomicUsize,
}

impl MockClientFactory {
    pub fn new(client: Arc<MockChatClient>) -> Self {
        Self {
            client: Some(client),
            created: AtomicUsize::new(0),
        }
    }

    /// A factory whose credential is missing.
    pub fn unconfigured() -> Self {
        Self {
            client: None,
            created: AtomicUsize::new(0),
        }
    }

    /// How many clients were handed out.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ClientFactory for MockClientFactory {
    fn create(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        let client = self
            .client
            .clone()
            .ok_or_else(|| DomainError::configuration("mock client has no credential"))?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(client)
    }
}
