//! The offline rule engine behind the provider trait.

use async_trait::async_trait;
use wise_core::error::ProviderError;
use wise_core::{AdviceProvider, AdviceRequest, Reply};

/// Answers with `wise_advisor::advise`. Never fails and never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form, usable outside a runtime.
    pub fn answer(&self, request: &AdviceRequest) -> Reply {
        wise_advisor::advise(
            &request.question,
            request.profile.as_ref(),
            &request.history,
        )
    }
}

#[async_trait]
impl AdviceProvider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<Reply, ProviderError> {
        Ok(self.answer(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wise_core::{ConversationTurn, UserProfile};

    #[tokio::test]
    async fn answers_through_the_trait() {
        let provider = LocalProvider::new();
        let reply = provider
            .advise(&AdviceRequest::new("What is a Roth IRA?"))
            .await
            .unwrap();
        assert!(reply.answer.contains("Roth IRA"));
        assert_eq!(provider.name(), "local");
    }

    #[tokio::test]
    async fn passes_profile_and_history() {
        let request = AdviceRequest::new("what about fees?")
            .with_profile(Some(UserProfile::new(Some(36_000.0), None)))
            .with_history(vec![ConversationTurn::assistant("invest in index funds")]);
        let reply = LocalProvider.advise(&request).await.unwrap();
        assert!(reply.answer.starts_with("Mind fees"));
    }
}
