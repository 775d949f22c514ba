//! Session store implementations for Wise.

pub mod file_backend;
pub mod in_memory;

pub use file_backend::FileSessionStore;
pub use in_memory::InMemorySessionStore;

use wise_core::message::{DEFAULT_HISTORY_LIMIT, DEFAULT_TITLE_MAX_CHARS};
use wise_core::{Session, SessionSummary};

/// Per-store bounds applied on every append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub history_limit: usize,
    pub title_max_chars: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Summaries ordered most recently updated first; ties go to the
/// later-created session.
pub(crate) fn summaries(sessions: &[Session]) -> Vec<SessionSummary> {
    let mut out: Vec<SessionSummary> = sessions.iter().rev().map(Session::summary).collect();
    out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    out
}
