use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ChatSession;

/// A session handle. Holding its lock makes the holder the session's only mutator.
pub type SharedSession = Arc<Mutex<ChatSession>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Look up a live session by id.
    async fn find(&self, id: &str) -> Option<SharedSession>;

    /// Start a fresh, empty session.
    async fn create(&self) -> SharedSession;

    /// Return the session for `id`, or a new one when `id` is absent or unknown.
    /// The flag is `true` when a session was created.
    async fn find_or_create(&self, id: Option<&str>) -> (SharedSession, bool) {
        if let Some(id) = id {
            if let Some(session) = self.find(id).await {
                return (session, false);
            }
        }
        (self.create().await, true)
    }

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
