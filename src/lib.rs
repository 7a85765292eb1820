pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    render_transcript, AskQuestionUseCase, ChatClient, ClientFactory, SessionRepository,
    SharedSession, SubmitPromptUseCase,
};

pub use cli::Commands;

pub use connector::{
    GroqClient, GroqClientFactory, InMemorySessionRepository, MockChatClient, MockClientFactory,
    DEFAULT_SESSION_TTL,
};

pub use domain::{
    Banner, ChatModel, ChatSession, DomainError, History, PresenterState, Prompt, Role, Turn,
};
