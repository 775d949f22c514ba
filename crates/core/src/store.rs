//! Session store trait: explicit persistence for conversation history.
//!
//! Replaces ambient caches with an injected key-value interface keyed by
//! [`SessionId`]. Implementations live in `wise-memory`.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::message::{ConversationTurn, Session, SessionId, SessionSummary};

/// The core session store trait.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// A human-readable name for this backend (e.g. "in_memory", "file").
    fn name(&self) -> &str;

    /// Create and persist an empty session.
    async fn create(&self, title: &str) -> Result<Session, StoreError>;

    /// Fetch a session by id.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, StoreError>;

    /// All sessions, most recently updated first.
    async fn list(&self) -> Result<Vec<SessionSummary>, StoreError>;

    /// Append turns to a session and return the updated session.
    ///
    /// Fails with [`StoreError::NotFound`] for unknown ids.
    async fn append(
        &self,
        id: &SessionId,
        turns: Vec<ConversationTurn>,
    ) -> Result<Session, StoreError>;

    /// Delete a session. Returns `true` if it existed.
    async fn delete(&self, id: &SessionId) -> Result<bool, StoreError>;

    /// Number of stored sessions.
    async fn count(&self) -> Result<usize, StoreError>;
}
