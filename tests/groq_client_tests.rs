//! GroqClient against a local stand-in for the chat-completion endpoint.
//!
//! The stub is an axum app bound to 127.0.0.1:0; it records every request it
//! receives and answers with a canned status and body.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use groqchat::{
    AskQuestionUseCase, ChatClient, ChatModel, ClientFactory, DomainError, GroqClient,
    GroqClientFactory,
};

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    status: StatusCode,
    body: String,
}

impl StubState {
    fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push((auth, body));
    (state.status, state.body.clone())
}

/// Start the stub; returns the API root to hand to the client.
async fn spawn_stub(status: StatusCode, body: Value) -> (String, StubState) {
    let state = StubState {
        requests: Arc::new(Mutex::new(Vec::new())),
        status,
        body: match body {
            Value::String(raw) => raw,
            other => other.to_string(),
        },
    };

    let app = Router::new()
        .route("/openai/v1/chat/completions", post(completions))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/openai", addr), state)
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "second choice"}, "finish_reason": "stop"}
        ]
    })
}

#[tokio::test]
async fn test_request_carries_model_prompt_and_bearer_key() {
    let (base_url, stub) = spawn_stub(StatusCode::OK, completion_body("Hello there")).await;
    let client = GroqClient::new("test-key", base_url).unwrap();

    let answer = client
        .complete(ChatModel::Llama31Instant, "Say hello")
        .await
        .expect("completion failed");

    assert_eq!(answer, "Hello there");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(
        body,
        &json!({
            "model": "llama-3.1-8b-instant",
            "messages": [{"role": "user", "content": "Say hello"}]
        })
    );
}

#[tokio::test]
async fn test_every_model_identifier_is_sent_verbatim() {
    let (base_url, stub) = spawn_stub(StatusCode::OK, completion_body("ok")).await;
    let client = GroqClient::new("test-key", base_url).unwrap();

    for model in ChatModel::all() {
        client.complete(*model, "ping").await.unwrap();
    }

    let sent: Vec<String> = stub
        .requests()
        .iter()
        .map(|(_, body)| body["model"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        sent,
        vec![
            "llama-3.3-70b-versatile".to_string(),
            "llama-3.1-8b-instant".to_string(),
            "llama-guard-3-8b".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_answer_is_returned_untruncated() {
    let long_answer = "word ".repeat(5_000);
    let (base_url, _stub) = spawn_stub(StatusCode::OK, completion_body(&long_answer)).await;
    let client = GroqClient::new("test-key", base_url).unwrap();

    let answer = client.complete(ChatModel::default(), "essay").await.unwrap();

    assert_eq!(answer, long_answer);
}

#[tokio::test]
async fn test_api_error_surfaces_provider_message() {
    let (base_url, _stub) = spawn_stub(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}),
    )
    .await;
    let client = GroqClient::new("wrong-key", base_url).unwrap();

    let err = client.complete(ChatModel::default(), "hi").await.unwrap_err();

    assert!(matches!(err, DomainError::Invocation(_)));
    assert_eq!(
        err.to_string(),
        "Invocation error: Groq API returned 401 Unauthorized: Invalid API Key"
    );
}

#[tokio::test]
async fn test_empty_choices_is_an_invocation_error() {
    let (base_url, _stub) = spawn_stub(StatusCode::OK, json!({"choices": []})).await;
    let client = GroqClient::new("test-key", base_url).unwrap();

    let err = client.complete(ChatModel::default(), "hi").await.unwrap_err();

    assert_eq!(err.to_string(), "Invocation error: response contained no choices");
}

#[tokio::test]
async fn test_unparseable_body_is_an_invocation_error() {
    let (base_url, _stub) = spawn_stub(StatusCode::OK, Value::String("not json".to_string())).await;
    let client = GroqClient::new("test-key", base_url).unwrap();

    let err = client.complete(ChatModel::default(), "hi").await.unwrap_err();

    assert!(matches!(err, DomainError::Invocation(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_an_invocation_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = GroqClient::new("test-key", format!("http://{}", addr)).unwrap();

    let err = client.complete(ChatModel::default(), "hi").await.unwrap_err();

    assert!(err.to_string().starts_with("Invocation error: request failed"));
}

#[tokio::test]
async fn test_missing_credential_fails_before_any_request() {
    let (base_url, stub) = spawn_stub(StatusCode::OK, completion_body("unused")).await;
    let factory = Arc::new(GroqClientFactory::new(None, base_url));
    let ask = AskQuestionUseCase::new(factory.clone());

    let err = ask.ask("hello", ChatModel::default()).await.unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "Configuration error: GROQ_API_KEY is not set in environment."
    );
    assert!(stub.requests().is_empty());
    assert!(factory.create().is_err());
}

#[tokio::test]
async fn test_factory_clients_use_the_configured_endpoint() {
    let (base_url, stub) = spawn_stub(StatusCode::OK, completion_body("from stub")).await;
    let factory = Arc::new(GroqClientFactory::new(Some("factory-key".to_string()), base_url));
    let ask = AskQuestionUseCase::new(factory);

    let answer = ask.ask("  question  ", ChatModel::LlamaGuard3).await.unwrap();

    assert_eq!(answer, "from stub");
    let requests = stub.requests();
    assert_eq!(requests[0].0.as_deref(), Some("Bearer factory-key"));
    assert_eq!(requests[0].1["messages"][0]["content"], "question");
    assert_eq!(requests[0].1["model"], "llama-guard-3-8b");
}
