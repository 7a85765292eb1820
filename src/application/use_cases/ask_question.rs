use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::ClientFactory;
use crate::domain::{ChatModel, DomainError, Prompt};

/// Sends one prompt to one model and returns the answer text.
///
/// The client is built through the factory on every call, so a missing
/// credential fails each submission before anything goes on the wire.
pub struct AskQuestionUseCase {
    client_factory: Arc<dyn ClientFactory>,
}

impl AskQuestionUseCase {
    pub fn new(client_factory: Arc<dyn ClientFactory>) -> Self {
        Self { client_factory }
    }

    pub async fn execute(&self, prompt: &Prompt, model: ChatModel) -> Result<String, DomainError> {
        let client = self.client_factory.create().map_err(|e| {
            error!("Cannot build chat client: {}", e);
            e
        })?;

        info!("Asking {} ({} chars)", model, prompt.as_str().len());
        let start_time = Instant::now();

        let answer = client.complete(model, prompt.as_str()).await?;

        debug!(
            "Answer from {} in {:?} ({} chars)",
            model,
            start_time.elapsed(),
            answer.len()
        );

        Ok(answer)
    }

    /// Same as [`Self::execute`] for raw text, rejecting blank input before
    /// the factory is consulted.
    pub async fn ask(&self, raw_prompt: &str, model: ChatModel) -> Result<String, DomainError> {
        let prompt = Prompt::parse(raw_prompt)
            .ok_or_else(|| DomainError::invalid_input("prompt must not be blank"))?;
        self.execute(&prompt, model).await
    }
}
