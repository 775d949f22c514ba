//! `wise sessions` — Saved chat management.

use wise_core::{Role, SessionId};

use super::{load_config, open_store, render_reply};

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let store = open_store(&config);
    let sessions = store.list().await?;

    if sessions.is_empty() {
        println!("No saved sessions. Start one with `wise chat`.");
        return Ok(());
    }

    println!("💬 Sessions ({})", sessions.len());
    println!("==============");
    for s in &sessions {
        println!(
            "  {}  {:>3} msgs  {}  {}",
            s.id,
            s.message_count,
            s.updated_at.format("%Y-%m-%d %H:%M"),
            s.title
        );
    }

    Ok(())
}

pub async fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let store = open_store(&config);
    let session = store
        .get(&SessionId::from(id))
        .await?
        .ok_or_else(|| format!("Session not found: {id}"))?;

    println!("{} ({})", session.title, session.id);
    println!("Updated {}", session.updated_at.to_rfc3339());
    println!();

    for turn in &session.messages {
        match turn.role {
            Role::User => println!("You > {}", turn.content),
            Role::Assistant => {
                let reply = wise_core::Reply {
                    answer: turn.content.clone(),
                    sources: turn.sources.clone(),
                };
                print!("{}", render_reply(&reply, "Wise > "));
            }
        }
        println!();
    }

    Ok(())
}

pub async fn delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let store = open_store(&config);

    if store.delete(&SessionId::from(id)).await? {
        println!("🗑️  Deleted session {id}");
        Ok(())
    } else {
        Err(format!("Session not found: {id}").into())
    }
}
