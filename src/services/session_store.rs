use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::Session;

/// Backing storage for per-user dialogue sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's session, or an idle one if none exists yet.
    async fn load(&self, user_id: &str) -> anyhow::Result<Session>;
    async fn save(&self, user_id: &str, session: Session) -> anyhow::Result<()>;
    async fn reset(&self, user_id: &str) -> anyhow::Result<()>;
}

/// Process-lifetime store. Nothing is persisted across restarts.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> anyhow::Result<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: &str) -> anyhow::Result<Session> {
        Ok(self.lock()?.get(user_id).cloned().unwrap_or_default())
    }

    async fn save(&self, user_id: &str, session: Session) -> anyhow::Result<()> {
        self.lock()?.insert(user_id.to_string(), session);
        Ok(())
    }

    async fn reset(&self, user_id: &str) -> anyhow::Result<()> {
        self.lock()?.remove(user_id);
        Ok(())
    }
}
