//! Provider fallback: an ordered retry chain with per-provider timeouts.
//!
//! When a provider fails (timeout, API error, empty answer), the next
//! provider in the chain is tried.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wise_core::error::ProviderError;
use wise_core::{AdviceProvider, AdviceRequest, Reply};

/// Timeout used by [`FallbackProvider::add_default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A provider that wraps an ordered list of providers and falls back on failure.
pub struct FallbackProvider {
    name: String,
    chain: Vec<FallbackEntry>,
}

/// A single entry in the fallback chain.
struct FallbackEntry {
    provider: Arc<dyn AdviceProvider>,
    timeout: Duration,
}

impl FallbackProvider {
    /// Create a new fallback provider with no entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain: Vec::new(),
        }
    }

    /// Add a provider to the fallback chain with a custom timeout.
    pub fn add(mut self, provider: Arc<dyn AdviceProvider>, timeout: Duration) -> Self {
        self.chain.push(FallbackEntry { provider, timeout });
        self
    }

    /// Add a provider with the default timeout (30s).
    pub fn add_default(self, provider: Arc<dyn AdviceProvider>) -> Self {
        self.add(provider, DEFAULT_TIMEOUT)
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Provider names in chain order.
    pub fn names(&self) -> Vec<&str> {
        self.chain.iter().map(|e| e.provider.name()).collect()
    }
}

#[async_trait]
impl AdviceProvider for FallbackProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<Reply, ProviderError> {
        let mut last_error = ProviderError::NotConfigured("No providers in fallback chain".into());

        for (i, entry) in self.chain.iter().enumerate() {
            let provider_name = entry.provider.name().to_string();

            info!(
                provider = %provider_name,
                attempt = i + 1,
                total = self.chain.len(),
                "Fallback: trying provider"
            );

            match tokio::time::timeout(entry.timeout, entry.provider.advise(request)).await {
                Ok(Ok(reply)) if reply.answer.trim().is_empty() => {
                    warn!(
                        provider = %provider_name,
                        "Fallback: provider returned an empty answer, trying next"
                    );
                    last_error = ProviderError::EmptyAnswer(provider_name);
                }
                Ok(Ok(reply)) => return Ok(reply),
                Ok(Err(e)) => {
                    warn!(
                        provider = %provider_name,
                        error = %e,
                        "Fallback: provider failed, trying next"
                    );
                    last_error = e;
                }
                Err(_) => {
                    warn!(
                        provider = %provider_name,
                        timeout_secs = entry.timeout.as_secs_f64(),
                        "Fallback: provider timed out, trying next"
                    );
                    last_error = ProviderError::Timeout(format!(
                        "Provider '{}' timed out after {}s",
                        provider_name,
                        entry.timeout.as_secs_f64()
                    ));
                }
            }
        }

        Err(last_error)
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        for entry in &self.chain {
            if let Ok(true) = entry.provider.health_check().await {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
