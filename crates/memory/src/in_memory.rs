//! In-memory session store: useful for testing and ephemeral chats.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use wise_core::error::StoreError;
use wise_core::{ConversationTurn, Session, SessionId, SessionStore, SessionSummary};

use crate::SessionLimits;

/// A store that keeps sessions in a Vec and forgets them on exit.
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<Vec<Session>>>,
    limits: SessionLimits,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_limits(SessionLimits::default())
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Vec::new())),
            limits,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn create(&self, title: &str) -> Result<Session, StoreError> {
        let session = Session::new(title);
        self.sessions.write().await.push(session.clone());
        Ok(session)
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, StoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().find(|s| &s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<SessionSummary>, StoreError> {
        Ok(crate::summaries(&self.sessions.read().await))
    }

    async fn append(
        &self,
        id: &SessionId,
        turns: Vec<ConversationTurn>,
    ) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        session.append(turns, self.limits.history_limit, self.limits.title_max_chars);
        Ok(session.clone())
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, StoreError> {
        let mut sessions = self.sessions.write().await;
        let len_before = sessions.len();
        sessions.retain(|s| &s.id != id);
        Ok(sessions.len() < len_before)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wise_core::message::DEFAULT_SESSION_TITLE;

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemorySessionStore::new();
        let session = store.create("").await.unwrap();
        assert_eq!(session.title, DEFAULT_SESSION_TITLE);

        let fetched = store.get(&session.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, session.id);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get(&SessionId::from("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_retitles_from_first_question() {
        let store = InMemorySessionStore::new();
        let session = store.create("").await.unwrap();
        let updated = store
            .append(
                &session.id,
                vec![
                    ConversationTurn::user("How do I start an emergency fund?"),
                    ConversationTurn::assistant("Start small."),
                ],
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "How do I start an emergency fund?");
        assert_eq!(updated.messages.len(), 2);
        assert!(updated.updated_at >= session.updated_at);
    }

    #[tokio::test]
    async fn append_to_unknown_session_fails() {
        let store = InMemorySessionStore::new();
        let err = store
            .append(&SessionId::from("ghost"), vec![ConversationTurn::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn history_is_trimmed_to_limit() {
        let store = InMemorySessionStore::with_limits(SessionLimits {
            history_limit: 4,
            title_max_chars: 60,
        });
        let session = store.create("Budget talk").await.unwrap();
        for i in 0..3 {
            store
                .append(
                    &session.id,
                    vec![
                        ConversationTurn::user(format!("q{i}")),
                        ConversationTurn::assistant(format!("a{i}")),
                    ],
                )
                .await
                .unwrap();
        }
        let session = store.get(&session.id).await.unwrap().unwrap();
        let contents: Vec<_> = session.messages.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "a1", "q2", "a2"]);
        assert_eq!(session.title, "Budget talk");
    }

    #[tokio::test]
    async fn list_orders_by_recent_activity() {
        let store = InMemorySessionStore::new();
        let a = store.create("first").await.unwrap();
        let b = store.create("second").await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, b.id);

        tokio::time::sleep(Duration::from_millis(5)).await;
        store
            .append(&a.id, vec![ConversationTurn::user("bump")])
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[0].message_count, 1);
        assert_eq!(listed[1].id, b.id);
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemorySessionStore::new();
        let session = store.create("x").await.unwrap();
        assert!(store.delete(&session.id).await.unwrap());
        assert!(!store.delete(&session.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
