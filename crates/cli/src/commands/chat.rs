//! `wise chat` — Interactive advice session over stdin.

use std::io::Write;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::warn;
use wise_core::{AdviceRequest, ConversationTurn, SessionId};
use wise_providers::AdvisorService;

use super::{load_config, open_store, render_reply, resolve_profile};

/// Lines that end the chat.
const EXIT_WORDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

fn is_exit(line: &str) -> bool {
    EXIT_WORDS.contains(&line)
}

pub async fn run(
    session: Option<String>,
    income: Option<f64>,
    balance: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let profile = resolve_profile(income, balance, &config);
    let store = open_store(&config);
    let service = AdvisorService::local_only();

    let mut session = match session {
        Some(id) => {
            let id = SessionId::from(&id);
            store
                .get(&id)
                .await?
                .ok_or_else(|| format!("Session not found: {id}"))?
        }
        None => store.create("").await?,
    };

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║          Wise — Personal Finance Chat          ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Session:   {} ({})", session.title, session.id);
    if !session.messages.is_empty() {
        println!("  History:   {} earlier messages", session.messages.len());
    }
    println!(
        "  Profile:   {}",
        if profile.is_some() { "active" } else { "none" }
    );
    println!();
    println!("  Type 'exit' or Ctrl+D to quit.");
    println!();
    println!("  Wise > {}", config.advisor.greeting);
    println!();

    let mut lines = BufReader::new(io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }
        if is_exit(line) {
            break;
        }

        let request = AdviceRequest::new(line)
            .with_profile(profile)
            .with_history(session.messages.clone());
        let reply = service.respond(&request).await;

        println!();
        print!("{}", render_reply(&reply, "  Wise > "));
        println!();

        let turns = vec![
            ConversationTurn::user(line),
            ConversationTurn::from_reply(&reply),
        ];
        match store.append(&session.id, turns).await {
            Ok(updated) => session = updated,
            Err(e) => {
                warn!(error = %e, session = %session.id, "Failed to save chat turn");
                eprintln!("  [Error] Could not save this exchange: {e}");
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Saved as \"{}\" ({})", session.title, session.id);
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}
