//! `wise ask` — Answer a single question.

use wise_core::{AdviceRequest, ConversationTurn, SessionId};
use wise_providers::AdvisorService;

use super::{load_config, open_store, render_reply, resolve_profile};

pub async fn run(
    question: &str,
    income: Option<f64>,
    balance: Option<f64>,
    session: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let profile = resolve_profile(income, balance, &config);
    let service = AdvisorService::local_only();

    let reply = match session {
        Some(id) => {
            let store = open_store(&config);
            let id = SessionId::from(&id);
            let session = store
                .get(&id)
                .await?
                .ok_or_else(|| format!("Session not found: {id}"))?;

            let request = AdviceRequest::new(question)
                .with_profile(profile)
                .with_history(session.messages);
            let reply = service.respond(&request).await;

            store
                .append(
                    &id,
                    vec![
                        ConversationTurn::user(question.trim()),
                        ConversationTurn::from_reply(&reply),
                    ],
                )
                .await?;
            reply
        }
        None => {
            service
                .respond(&AdviceRequest::new(question).with_profile(profile))
                .await
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print!("{}", render_reply(&reply, ""));
    }

    Ok(())
}
