mod chat_client;
mod client_factory;
mod session_repository;

pub use chat_client::*;
pub use client_factory::*;
pub use session_repository::*;
