//! Provider trait: the abstraction over answer sources.
//!
//! A provider turns a question (plus profile and history) into a [`Reply`].
//! The local rule-based engine is one provider; an external AI client can be
//! another, constructed once by the caller and injected where needed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::ConversationTurn;
use crate::profile::UserProfile;
use crate::reply::Reply;

/// Everything an answer source gets to see.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub question: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,

    /// Prior turns, oldest first
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl AdviceRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            profile: None,
            history: Vec::new(),
        }
    }

    pub fn with_profile(mut self, profile: Option<UserProfile>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// The core provider trait.
///
/// Callers ask `advise()` without knowing whether the answer comes from the
/// keyword engine or a remote model.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// A human-readable name for this provider (e.g. "local", "gemini").
    fn name(&self) -> &str;

    /// Answer a question.
    async fn advise(&self, request: &AdviceRequest) -> Result<Reply, ProviderError>;

    /// Whether the provider is reachable.
    async fn health_check(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl AdviceProvider for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn advise(&self, request: &AdviceRequest) -> Result<Reply, ProviderError> {
            Ok(Reply::new(request.question.clone()))
        }
    }

    #[test]
    fn request_builder_sets_fields() {
        let req = AdviceRequest::new("What is an ETF?")
            .with_profile(Some(UserProfile::new(Some(1.0), None)))
            .with_history(vec![ConversationTurn::user("hi")]);
        assert_eq!(req.question, "What is an ETF?");
        assert!(req.profile.is_some());
        assert_eq!(req.history.len(), 1);
    }

    #[tokio::test]
    async fn default_health_check_is_healthy() {
        let p = Echo;
        assert!(p.health_check().await.unwrap());
        let reply = p.advise(&AdviceRequest::new("ping")).await.unwrap();
        assert_eq!(reply.answer, "ping");
    }
}
