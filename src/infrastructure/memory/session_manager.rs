//! In-Memory Session Manager Implementation

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let token = session.token.clone();
        match self.sessions.entry(token.clone()) {
            Entry::Occupied(_) => Err(SessionError::AlreadyExists(token)),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    username = %session.username,
                    created_at = %session.created_at,
                    "Session created"
                );
                slot.insert(session);
                Ok(token)
            }
        }
    }

    fn get(&self, token: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(token)
            .map(|s| s.clone())
            .ok_or(SessionError::NotFound)
    }

    fn is_valid(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    fn close(&self, token: &str) -> Result<Session, SessionError> {
        self.sessions
            .remove(token)
            .map(|(_, session)| {
                tracing::debug!(username = %session.username, "Session closed");
                session
            })
            .ok_or(SessionError::NotFound)
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
