//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Chat completion (Groq HTTP API, plus an offline mock)
//! - Session storage (in-memory)
//! - Entry points (CLI controllers, web page)

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
