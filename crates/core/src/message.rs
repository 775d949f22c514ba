//! Conversation turns and session domain types.
//!
//! These are the value objects that flow through the system:
//! user asks a question → a provider (or the local engine) answers →
//! both turns are appended to the session history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reply::{Reply, Source};

/// Title given to a freshly created session.
pub const DEFAULT_SESSION_TITLE: &str = "New Chat";

/// Turns kept per session when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Characters kept when a session is titled from its first question.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 60;

/// Unique identifier for a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The advisor
    Assistant,
}

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,

    pub content: String,

    /// Citations shown with an assistant answer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl ConversationTurn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Create an assistant turn without citations.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Create an assistant turn from a reply, keeping its citations.
    pub fn from_reply(reply: &Reply) -> Self {
        Self {
            role: Role::Assistant,
            content: reply.answer.clone(),
            sources: reply.sources.clone(),
        }
    }
}

/// The most recent assistant turn in a history (oldest first), if any.
pub fn last_assistant(history: &[ConversationTurn]) -> Option<&ConversationTurn> {
    history.iter().rev().find(|t| t.role == Role::Assistant)
}

/// A persisted conversation with a title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,

    pub title: String,

    /// Ordered turns, oldest first
    #[serde(default)]
    pub messages: Vec<ConversationTurn>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create an empty session. An empty title falls back to the default.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            title: if title.trim().is_empty() {
                DEFAULT_SESSION_TITLE.to_string()
            } else {
                title
            },
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append turns, retitle an untitled session from its first user turn,
    /// and keep only the most recent `history_limit` turns.
    pub fn append(
        &mut self,
        turns: impl IntoIterator<Item = ConversationTurn>,
        history_limit: usize,
        title_max_chars: usize,
    ) {
        let start = self.messages.len();
        self.messages.extend(turns);

        if self.title == DEFAULT_SESSION_TITLE {
            if let Some(first) = self.messages[start..]
                .iter()
                .find(|t| t.role == Role::User && !t.content.trim().is_empty())
            {
                self.title = title_from(&first.content, title_max_chars);
            }
        }

        if self.messages.len() > history_limit {
            let excess = self.messages.len() - history_limit;
            self.messages.drain(..excess);
        }
        self.updated_at = Utc::now();
    }

    /// Lightweight listing view.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            message_count: self.messages.len(),
            updated_at: self.updated_at,
        }
    }
}

/// A session without its messages, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub title: String,
    pub message_count: usize,
    pub updated_at: DateTime<Utc>,
}

/// Derive a session title from user text: trimmed, at most `max_chars`
/// characters, with an ellipsis when cut.
pub fn title_from(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}
