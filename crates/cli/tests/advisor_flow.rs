//! End-to-end tests for the Wise advice pipeline.
//!
//! These exercise the path a chat takes: question in, advisor service
//! answers (external provider or local engine), turns are persisted to a
//! session store and fed back as history for the next question.

use std::sync::Arc;
use std::time::Duration;

use wise_config::AppConfig;
use wise_core::error::ProviderError;
use wise_core::{
    AdviceProvider, AdviceRequest, ConversationTurn, Reply, SessionStore, UserProfile,
};
use wise_memory::{FileSessionStore, InMemorySessionStore, SessionLimits};
use wise_providers::AdvisorService;

// ── Mock Provider ────────────────────────────────────────────────────────

/// An external provider that is always down.
struct OfflineProvider;

#[async_trait::async_trait]
impl AdviceProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn advise(&self, _request: &AdviceRequest) -> Result<Reply, ProviderError> {
        Err(ProviderError::Network("connection refused".into()))
    }
}

/// An external provider that answers in free text without citations.
struct ChattyProvider;

#[async_trait::async_trait]
impl AdviceProvider for ChattyProvider {
    fn name(&self) -> &str {
        "chatty"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<Reply, ProviderError> {
        Ok(Reply::new(format!(
            "You asked '{}'. Build a budget and an emergency fund to start.",
            request.question
        )))
    }
}

async fn ask(
    service: &AdvisorService,
    store: &dyn SessionStore,
    session: &wise_core::SessionId,
    question: &str,
    profile: Option<UserProfile>,
) -> Reply {
    let history = store.get(session).await.unwrap().unwrap().messages;
    let request = AdviceRequest::new(question)
        .with_profile(profile)
        .with_history(history);
    let reply = service.respond(&request).await;
    store
        .append(
            session,
            vec![ConversationTurn::user(question), ConversationTurn::from_reply(&reply)],
        )
        .await
        .unwrap();
    reply
}

// ── Tests ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fee_follow_up_uses_stored_history() {
    let service = AdvisorService::local_only();
    let store = InMemorySessionStore::new();
    let session = store.create("").await.unwrap();

    let first = ask(&service, &store, &session.id, "Should I use index funds/ETFs?", None).await;
    assert!(first.answer.contains("investing"));

    let second = ask(&service, &store, &session.id, "what about fees?", None).await;
    assert!(second.answer.starts_with("Mind fees"));
    assert_eq!(second.sources.len(), 1);

    let saved = store.get(&session.id).await.unwrap().unwrap();
    assert_eq!(saved.messages.len(), 4);
    assert_eq!(saved.title, "Should I use index funds/ETFs?");
    assert_eq!(saved.messages[3].sources, second.sources);
}

#[tokio::test]
async fn offline_provider_degrades_to_local_engine() {
    let service = AdvisorService::local_only()
        .with_provider(Arc::new(OfflineProvider), Duration::from_secs(1));
    let store = InMemorySessionStore::new();
    let session = store.create("").await.unwrap();

    let profile = UserProfile::new(Some(36_000.0), Some(1_200.0));
    let reply = ask(&service, &store, &session.id, "How do I start a budget?", Some(profile)).await;

    assert!(reply.answer.contains("$9,000"));
    assert!(reply.answer.contains("Your profile: balance $1,200, income $36,000."));
    assert_eq!(reply.sources.len(), 3);
}

#[tokio::test]
async fn external_answers_get_citations() {
    let service = AdvisorService::local_only()
        .with_provider(Arc::new(ChattyProvider), Duration::from_secs(1));
    let reply = service.respond(&AdviceRequest::new("help")).await;

    let urls: Vec<_> = reply.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://www.consumerfinance.gov/consumer-tools/budgeting/",
            "https://www.investopedia.com/terms/e/emergency_fund.asp",
        ]
    );
}

#[tokio::test]
async fn sessions_survive_reopening_the_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sessions.jsonl");
    let service = AdvisorService::local_only();

    let session_id = {
        let store = FileSessionStore::new(path.clone());
        let session = store.create("").await.unwrap();
        ask(&service, &store, &session.id, "What is a Roth IRA?", None).await;
        session.id
    };

    let store = FileSessionStore::new(path);
    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "What is a Roth IRA?");
    assert_eq!(listed[0].message_count, 2);

    let reopened = store.get(&session_id).await.unwrap().unwrap();
    assert_eq!(reopened.messages[1].sources.len(), 1);
    assert_eq!(
        reopened.messages[1].sources[0].url,
        "https://www.irs.gov/retirement-plans/roth-iras"
    );
}

#[tokio::test]
async fn configured_limits_flow_into_the_store() {
    let mut config = AppConfig::default();
    config
        .apply_env_overrides(|key| (key == "WISE_HISTORY_LIMIT").then(|| "4".to_string()))
        .unwrap();

    let store = InMemorySessionStore::with_limits(SessionLimits {
        history_limit: config.advisor.history_limit,
        title_max_chars: config.advisor.title_max_chars,
    });
    let service = AdvisorService::local_only();
    let session = store.create("").await.unwrap();

    for q in ["tax", "budget", "invest"] {
        ask(&service, &store, &session.id, q, None).await;
    }

    let saved = store.get(&session.id).await.unwrap().unwrap();
    assert_eq!(saved.messages.len(), 4);
    assert_eq!(saved.messages[0].content, "budget");
    assert_eq!(saved.title, "tax");
}

#[test]
fn reply_json_shape() {
    let reply = wise_advisor::advise("APR", None, &[]);
    let value = serde_json::to_value(&reply).unwrap();
    assert!(value["answer"].as_str().unwrap().starts_with("APR is"));
    assert_eq!(value["sources"][0]["title"], "FINRA · APR vs. APY");
    assert_eq!(value["sources"].as_array().unwrap().len(), 1);
}
