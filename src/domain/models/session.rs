use std::time::{Duration, Instant};

use uuid::Uuid;

use super::{ChatModel, History, Prompt};
use crate::domain::DomainError;

pub const BLANK_PROMPT_WARNING: &str = "Please enter a question.";

/// Where a session is in the submit/render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    /// No submission in flight.
    Idle,
    /// A request was issued; the surface shows a busy indicator.
    Pending { model: ChatModel },
    /// The log was updated or an error was recorded. Back to `Idle` on the next interaction.
    Rendered,
}

/// One-line notice shown above the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Warning(String),
    Error(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Warning(msg) | Banner::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }

    /// The line as displayed: warnings as-is, errors prefixed with `Error:`.
    pub fn display_line(&self) -> String {
        match self {
            Banner::Warning(msg) => msg.clone(),
            Banner::Error(msg) => format!("Error: {}", msg),
        }
    }
}

/// Per-session state: the conversation log plus what the form last showed.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    history: History,
    state: PresenterState,
    banner: Option<Banner>,
    selected_model: ChatModel,
    draft: String,
    last_active: Instant,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: History::new(),
            state: PresenterState::Idle,
            banner: None,
            selected_model: ChatModel::default(),
            draft: String::new(),
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn selected_model(&self) -> ChatModel {
        self.selected_model
    }

    pub fn set_selected_model(&mut self, model: ChatModel) {
        self.selected_model = model;
    }

    /// The prompt text as last typed; the form keeps it after submission.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    /// Start of any interaction: a rendered session falls back to idle and the
    /// previous banner is cleared.
    pub fn acknowledge(&mut self) {
        self.last_active = Instant::now();
        if self.state == PresenterState::Rendered {
            self.state = PresenterState::Idle;
        }
        self.banner = None;
    }

    /// Idle → Pending for a non-blank prompt. A blank prompt stays idle with a
    /// warning and yields `None`.
    pub fn submit(&mut self, raw_prompt: &str, model: ChatModel) -> Option<Prompt> {
        self.acknowledge();
        self.draft = raw_prompt.to_string();
        self.selected_model = model;

        match Prompt::parse(raw_prompt) {
            Some(prompt) => {
                self.state = PresenterState::Pending { model };
                Some(prompt)
            }
            None => {
                self.banner = Some(Banner::Warning(BLANK_PROMPT_WARNING.to_string()));
                None
            }
        }
    }

    /// Stay idle and show a warning without submitting anything.
    pub fn reject(&mut self, raw_prompt: &str, warning: impl Into<String>) {
        self.acknowledge();
        self.draft = raw_prompt.to_string();
        self.banner = Some(Banner::Warning(warning.into()));
    }

    /// Pending → Rendered. On success the exchange is appended as a pair; on
    /// failure nothing is appended and the error text becomes the banner.
    pub fn resolve(
        &mut self,
        prompt: &Prompt,
        outcome: Result<String, DomainError>,
    ) -> Result<(), DomainError> {
        if !matches!(self.state, PresenterState::Pending { .. }) {
            return Err(DomainError::internal(format!(
                "session {} has no submission in flight",
                self.id
            )));
        }

        match outcome {
            Ok(answer) => {
                self.history.append_exchange(prompt, answer);
                self.banner = None;
            }
            Err(e) => {
                self.banner = Some(Banner::Error(e.message().to_string()));
            }
        }

        self.state = PresenterState::Rendered;
        self.last_active = Instant::now();
        Ok(())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
