use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::connector::api::Container;
use crate::ChatSession;

use super::session_cookie::{self, set_cookie_value};
use super::view::render_page;

/// The submitted form. Missing fields count as blank.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub model: String,
}

#[derive(Clone)]
pub struct WebState {
    container: Arc<Container>,
}

impl WebState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

pub fn create_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit_form))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve the chat page until the process stops.
pub async fn start_server(container: Arc<Container>, address: &str) -> Result<()> {
    let app = create_router(WebState::new(container));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    info!("Groq Chat listening on http://{}", address);
    info!("   GET  /        chat page");
    info!("   POST /        form submission");
    info!("   GET  /health  liveness");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Viewing never creates a session; the first submission does.
async fn show_page(State(state): State<WebState>, headers: HeaderMap) -> Response {
    let known = match session_cookie::session_id(&headers) {
        Some(id) => state.container.sessions().find(&id).await,
        None => None,
    };

    match known {
        Some(shared) => {
            let mut session = shared.lock().await;
            session.acknowledge();
            page_response(&session, false)
        }
        None => Html(render_page(&ChatSession::new())).into_response(),
    }
}

async fn submit_form(
    State(state): State<WebState>,
    headers: HeaderMap,
    Form(form): Form<AskForm>,
) -> Response {
    let sessions = state.container.sessions();
    let id = session_cookie::session_id(&headers);
    let (shared, created) = sessions.find_or_create(id.as_deref()).await;

    // Held for the whole cycle: one submission per session at a time.
    let mut session = shared.lock().await;
    let use_case = state.container.submit_use_case();

    if let Some((prompt, _model)) = use_case.begin_with_model_id(&mut session, &form.prompt, &form.model) {
        if let Err(e) = use_case.finish(&mut session, &prompt).await {
            error!("Session {}: {}", session.id(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    }

    page_response(&session, created)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "groqchat",
    }))
}

fn page_response(session: &ChatSession, new_session: bool) -> Response {
    let body = Html(render_page(session));
    if new_session {
        ([(SET_COOKIE, set_cookie_value(session.id()))], body).into_response()
    } else {
        body.into_response()
    }
}
