use std::sync::Arc;

use tracing::{debug, warn};

use super::AskQuestionUseCase;
use crate::domain::{ChatModel, ChatSession, DomainError, Prompt, PresenterState};

/// Drives one form submission through the presenter cycle:
/// Idle → Pending → Rendered, or Idle with a warning for blank input.
///
/// The session is passed in explicitly; this use case holds no conversation state.
pub struct SubmitPromptUseCase {
    ask: Arc<AskQuestionUseCase>,
}

impl SubmitPromptUseCase {
    pub fn new(ask: Arc<AskQuestionUseCase>) -> Self {
        Self { ask }
    }

    /// Validate the input and move the session to `Pending`.
    ///
    /// Returns `None` when the session stayed idle (blank prompt).
    pub fn begin(&self, session: &mut ChatSession, raw_prompt: &str, model: ChatModel) -> Option<Prompt> {
        let prompt = session.submit(raw_prompt, model);
        if prompt.is_none() {
            debug!("Session {}: blank prompt ignored", session.id());
        }
        prompt
    }

    /// Like [`Self::begin`] for a model id that still has to be checked
    /// against the selectable list.
    pub fn begin_with_model_id(
        &self,
        session: &mut ChatSession,
        raw_prompt: &str,
        model_id: &str,
    ) -> Option<(Prompt, ChatModel)> {
        // A blank prompt is reported as such whatever the model id says.
        if Prompt::parse(raw_prompt).is_none() {
            let model = session.selected_model();
            return self.begin(session, raw_prompt, model).map(|p| (p, model));
        }

        match model_id.parse::<ChatModel>() {
            Ok(model) => self.begin(session, raw_prompt, model).map(|p| (p, model)),
            Err(DomainError::InvalidInput(msg)) => {
                warn!("Session {}: {}", session.id(), msg);
                session.reject(raw_prompt, msg);
                None
            }
            Err(e) => {
                session.reject(raw_prompt, e.to_string());
                None
            }
        }
    }

    /// Invoke the model for a pending session and move it to `Rendered`.
    pub async fn finish(&self, session: &mut ChatSession, prompt: &Prompt) -> Result<(), DomainError> {
        let model = match session.state() {
            PresenterState::Pending { model } => model,
            _ => {
                return Err(DomainError::internal(format!(
                    "session {} has no submission in flight",
                    session.id()
                )))
            }
        };

        let outcome = self.ask.execute(prompt, model).await;
        if let Err(ref e) = outcome {
            warn!("Session {}: submission failed: {}", session.id(), e);
        }

        session.resolve(prompt, outcome)
    }

    pub async fn execute(
        &self,
        session: &mut ChatSession,
        raw_prompt: &str,
        model: ChatModel,
    ) -> Result<PresenterState, DomainError> {
        if let Some(prompt) = self.begin(session, raw_prompt, model) {
            self.finish(session, &prompt).await?;
        }
        Ok(session.state())
    }
}
