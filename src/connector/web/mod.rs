//! Web surface: the chat page served by axum.
//!
//! - `GET /` renders the form and the session's transcript
//! - `POST /` submits the form and renders the result
//! - `GET /health` reports liveness
//!
//! Sessions are tied to the browser by the `groqchat_session` cookie, issued
//! on the first submission.

pub mod server;
pub mod session_cookie;
pub mod view;

pub use server::{create_router, start_server, AskForm, WebState};
