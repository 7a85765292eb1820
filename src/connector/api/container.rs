use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use crate::application::{ClientFactory, SessionRepository};
use crate::{
    AskQuestionUseCase, DomainError, GroqClientFactory, InMemorySessionRepository, MockChatClient,
    MockClientFactory, SubmitPromptUseCase, DEFAULT_SESSION_TTL,
};

pub struct ContainerConfig {
    /// Answer offline with [`MockChatClient`] instead of calling Groq.
    pub mock_client: bool,
    /// Overrides `GROQ_BASE_URL` / the default API root.
    pub groq_base_url: Option<String>,
    pub session_ttl: Duration,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock_client: false,
            groq_base_url: None,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

/// Wires adapters into use cases. Shared by the CLI controllers and the web surface.
pub struct Container {
    client_factory: Arc<dyn ClientFactory>,
    sessions: Arc<dyn SessionRepository>,
    ask_use_case: Arc<AskQuestionUseCase>,
    submit_use_case: Arc<SubmitPromptUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client_factory: Arc<dyn ClientFactory> = if config.mock_client {
            debug!("Using mock chat client");
            Arc::new(MockClientFactory::new(Arc::new(MockChatClient::new())))
        } else {
            let mut factory = GroqClientFactory::from_env();
            if let Some(base_url) = config.groq_base_url.as_deref() {
                factory = factory.with_base_url(base_url);
            }
            debug!("Using Groq API at {}", factory.base_url());
            Arc::new(factory)
        };

        Self::with_client_factory(config, client_factory)
    }

    pub fn with_client_factory(config: ContainerConfig, client_factory: Arc<dyn ClientFactory>) -> Self {
        let sessions: Arc<dyn SessionRepository> =
            Arc::new(InMemorySessionRepository::with_ttl(config.session_ttl));
        let ask_use_case = Arc::new(AskQuestionUseCase::new(Arc::clone(&client_factory)));
        let submit_use_case = Arc::new(SubmitPromptUseCase::new(Arc::clone(&ask_use_case)));

        Self {
            client_factory,
            sessions,
            ask_use_case,
            submit_use_case,
            config,
        }
    }

    /// Build a client once without sending anything, so a missing credential
    /// is reported to the operator at startup.
    pub fn check_credentials(&self) -> Result<(), DomainError> {
        self.client_factory.create().map(|_| ()).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    pub fn ask_use_case(&self) -> Arc<AskQuestionUseCase> {
        Arc::clone(&self.ask_use_case)
    }

    pub fn submit_use_case(&self) -> Arc<SubmitPromptUseCase> {
        Arc::clone(&self.submit_use_case)
    }

    pub fn sessions(&self) -> Arc<dyn SessionRepository> {
        Arc::clone(&self.sessions)
    }

    pub fn uses_mock_client(&self) -> bool {
        self.config.mock_client
    }
}
