//! # Wise Core
//!
//! Domain types, traits, and error definitions for the Wise personal-finance
//! advisor. This crate has no runtime dependencies beyond serde and the
//! error/time helpers; everything else depends inward on it.
//!
//! ## Layout
//!
//! - [`message`] — conversation turns and persisted sessions
//! - [`profile`] — the optional user profile snapshot
//! - [`reply`] — answers and their citation sources
//! - [`provider`] — the [`AdviceProvider`] seam for answer sources
//! - [`store`] — the [`SessionStore`] seam for conversation persistence

pub mod error;
pub mod message;
pub mod profile;
pub mod provider;
pub mod reply;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, StoreError};
pub use message::{ConversationTurn, Role, Session, SessionId, SessionSummary};
pub use profile::UserProfile;
pub use provider::{AdviceProvider, AdviceRequest};
pub use reply::{MAX_SOURCES, Reply, Source};
pub use store::SessionStore;
