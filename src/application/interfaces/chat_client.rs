use async_trait::async_trait;

use crate::domain::{ChatModel, DomainError};

/// An interface for sending a single user prompt to a hosted model and
/// receiving the assistant's text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::AskQuestionUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send exactly one `user` message to `model` and return the first
    /// choice's content, unmodified.
    async fn complete(&self, model: ChatModel, prompt: &str) -> Result<String, DomainError>;
}
