mod groq_client;
mod in_memory_session_repository;
mod mock_chat_client;

pub use groq_client::*;
pub use in_memory_session_repository::*;
pub use mock_chat_client::*;
