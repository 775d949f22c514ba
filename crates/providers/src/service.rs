//! The advisor service: external chain first, local engine always.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use wise_core::{AdviceProvider, AdviceRequest, Reply};

use crate::citations::extract_sources;
use crate::fallback::FallbackProvider;
use crate::local::LocalProvider;

/// Answers every question. Configured external providers are tried in order;
/// any failure degrades to the local engine with the same request.
pub struct AdvisorService {
    chain: FallbackProvider,
    local: LocalProvider,
}

impl Default for AdvisorService {
    fn default() -> Self {
        Self::local_only()
    }
}

impl AdvisorService {
    /// A service that only uses the local engine.
    pub fn local_only() -> Self {
        Self {
            chain: FallbackProvider::new("external"),
            local: LocalProvider::new(),
        }
    }

    /// Put an external provider in front of the local engine.
    pub fn with_provider(mut self, provider: Arc<dyn AdviceProvider>, timeout: Duration) -> Self {
        self.chain = self.chain.add(provider, timeout);
        self
    }

    /// Whether any external provider is configured.
    pub fn has_external(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Produce a reply. Never fails.
    pub async fn respond(&self, request: &AdviceRequest) -> Reply {
        if self.chain.is_empty() {
            return self.local.answer(request);
        }

        match self.chain.advise(request).await {
            Ok(mut reply) => {
                if reply.sources.is_empty() {
                    reply.sources = extract_sources(&reply.answer);
                }
                debug!(
                    sources = reply.sources.len(),
                    "Answered by external provider"
                );
                reply.normalized()
            }
            Err(e) => {
                warn!(error = %e, "External providers failed, using local engine");
                self.local.answer(request)
            }
        }
    }
}
