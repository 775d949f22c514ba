//! CLI subcommands and the wiring they share.

pub mod ask;
pub mod chat;
pub mod config_cmd;
pub mod onboard;
pub mod sessions;
pub mod topics;

use std::sync::Arc;

use wise_config::AppConfig;
use wise_core::{Reply, SessionStore, UserProfile};
use wise_memory::{FileSessionStore, InMemorySessionStore, SessionLimits};

/// Load config, surfacing failures as a domain error.
pub fn load_config() -> wise_core::Result<AppConfig> {
    AppConfig::load().map_err(|e| wise_core::Error::Config {
        message: e.to_string(),
    })
}

/// Profile from flags; without either flag, the configured default.
pub fn resolve_profile(
    income: Option<f64>,
    balance: Option<f64>,
    config: &AppConfig,
) -> Option<UserProfile> {
    if income.is_none() && balance.is_none() {
        return config.profile;
    }
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
    Some(UserProfile::new(finite(income), finite(balance)))
}

/// Store bounds taken from the advisor section.
pub fn session_limits(config: &AppConfig) -> SessionLimits {
    SessionLimits {
        history_limit: config.advisor.history_limit,
        title_max_chars: config.advisor.title_max_chars,
    }
}

/// Open the configured session store.
pub fn open_store(config: &AppConfig) -> Arc<dyn SessionStore> {
    let limits = session_limits(config);
    match config.storage.backend.as_str() {
        "memory" => Arc::new(InMemorySessionStore::with_limits(limits)),
        _ => Arc::new(FileSessionStore::with_limits(config.sessions_path(), limits)),
    }
}

/// Render a reply for the terminal: answer, then numbered sources.
pub fn render_reply(reply: &Reply, indent: &str) -> String {
    let mut out = String::new();
    for line in reply.answer.lines() {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
    if !reply.sources.is_empty() {
        out.push('\n');
        out.push_str(indent);
        out.push_str("Sources:\n");
        for (i, source) in reply.sources.iter().enumerate() {
            out.push_str(&format!("{indent}  {}. {} <{}>\n", i + 1, source.title, source.url));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wise_core::Source;

    #[test]
    fn flags_override_config_profile() {
        let mut config = AppConfig::default();
        config.profile = Some(UserProfile::new(Some(10.0), Some(20.0)));

        assert_eq!(resolve_profile(None, None, &config), config.profile);
        assert_eq!(
            resolve_profile(Some(50_000.0), None, &config),
            Some(UserProfile::new(Some(50_000.0), None))
        );
        assert_eq!(
            resolve_profile(Some(f64::NAN), Some(5.0), &config),
            Some(UserProfile::new(None, Some(5.0)))
        );
    }

    #[test]
    fn no_flags_no_config_means_no_profile() {
        assert!(resolve_profile(None, None, &AppConfig::default()).is_none());
    }

    #[test]
    fn renders_answer_and_sources() {
        let reply = Reply::new("line one\nline two").cite(Source::new("IRS", "https://www.irs.gov"));
        let text = render_reply(&reply, "  ");
        assert!(text.starts_with("  line one\n  line two\n"));
        assert!(text.contains("  Sources:\n    1. IRS <https://www.irs.gov>\n"));
    }

    #[test]
    fn default_config_limits_match_store_defaults() {
        assert_eq!(session_limits(&AppConfig::default()), SessionLimits::default());
    }

    #[tokio::test]
    async fn memory_backend_is_selectable() {
        let mut config = AppConfig::default();
        config.storage.backend = "memory".into();
        let store = open_store(&config);
        assert_eq!(store.name(), "in_memory");
    }
}
