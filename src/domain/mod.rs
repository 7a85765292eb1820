//! # Domain Layer
//!
//! Conversation models, the presenter state machine, and the error type.
//! This layer is independent of HTTP, terminals, and the inference provider.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
