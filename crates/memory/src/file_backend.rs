//! File-based session store: persistent JSON-lines storage.
//!
//! Each line is one JSON-encoded [`Session`], history included. The file is
//! read once at construction and rewritten on every mutation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use wise_core::error::StoreError;
use wise_core::{ConversationTurn, Session, SessionId, SessionStore, SessionSummary};

use crate::SessionLimits;

/// A file-backed session store using JSONL (one session per line).
///
/// Sessions are held in memory for reads and flushed to disk on every
/// mutation (create, append, delete).
pub struct FileSessionStore {
    path: PathBuf,
    sessions: Arc<RwLock<Vec<Session>>>,
    limits: SessionLimits,
}

impl FileSessionStore {
    /// Open a store at the given path.
    ///
    /// If the file exists, sessions are loaded from it.
    /// If it does not, the store starts empty and the file is created on
    /// first write.
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, SessionLimits::default())
    }

    pub fn with_limits(path: PathBuf, limits: SessionLimits) -> Self {
        let sessions = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = sessions.len(), "Session file loaded");
        Self {
            path,
            sessions: Arc::new(RwLock::new(sessions)),
            limits,
        }
    }

    fn load_from_disk(path: &Path) -> Vec<Session> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Vec::new(), // Not created yet
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<Session>(line) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(error = %e, "Skipping corrupted session line");
                    None
                }
            })
            .collect()
    }

    /// Write all sessions to disk as JSONL.
    fn flush(&self, sessions: &[Session]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create session directory: {e}"))
            })?;
        }

        let mut content = String::new();
        for session in sessions {
            let line = serde_json::to_string(session)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            content.push_str(&line);
            content.push('\n');
        }

        std::fs::write(&self.path, &content)
            .map_err(|e| StoreError::Storage(format!("Failed to write session file: {e}")))?;

        Ok(())
    }

    /// Replace the held sessions with `next` once it is on disk. A failed
    /// write leaves memory untouched.
    fn commit(&self, held: &mut Vec<Session>, next: Vec<Session>) -> Result<(), StoreError> {
        self.flush(&next)?;
        *held = next;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn create(&self, title: &str) -> Result<Session, StoreError> {
        let session = Session::new(title);
        let mut sessions = self.sessions.write().await;
        let mut next = sessions.clone();
        next.push(session.clone());
        self.commit(&mut sessions, next)?;
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
        let index = sessions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut next = sessions.clone();
        next[index].append(turns, self.limits.history_limit, self.limits.title_max_chars);
        let updated = next[index].clone();
        self.commit(&mut sessions, next)?;
        Ok(updated)
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, StoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.iter().any(|s| &s.id == id) {
            return Ok(false);
        }
        let next: Vec<Session> = sessions.iter().filter(|s| &s.id != id).cloned().collect();
        self.commit(&mut sessions, next)?;
        Ok(true)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.sessions.read().await.len())
    }
}
