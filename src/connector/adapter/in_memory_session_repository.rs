use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::application::{SessionRepository, SharedSession};
use crate::domain::ChatSession;

/// Sessions idle longer than this are dropped when new sessions are created.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Process-lifetime session store. Nothing survives a restart.
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SharedSession>>>,
    ttl: Duration,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Drop sessions idle past the TTL. A session whose lock is held is in use
    /// and always kept.
    async fn prune_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let ttl = self.ttl;

        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => guard.idle_for() < ttl,
            Err(_) => true,
        });

        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!("Pruned {} expired sessions", pruned);
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find(&self, id: &str) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn create(&self) -> SharedSession {
        self.prune_expired().await;

        let session = ChatSession::new();
        let id = session.id().to_string();
        let shared = Arc::new(Mutex::new(session));

        self.sessions.write().await.insert(id.clone(), Arc::clone(&shared));
        debug!("Created session {}", id);

        shared
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
