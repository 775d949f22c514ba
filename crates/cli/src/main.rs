//! Wise CLI — the main entry point.
//!
//! Commands:
//! - `ask`      — Answer one question
//! - `chat`     — Interactive advice session
//! - `topics`   — List topics and glossary terms
//! - `sessions` — Inspect or delete saved chats
//! - `config`   — Show, locate, or validate configuration
//! - `onboard`  — Write a default config file

use clap::{Parser, Subcommand};
use wise_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "wise",
    about = "Wise — your rule-based personal-finance advisor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question, e.g. "What is a Roth IRA?"
        question: String,

        /// Annual income used to personalize the answer
        #[arg(long)]
        income: Option<f64>,

        /// Current balance used to personalize the answer
        #[arg(long)]
        balance: Option<f64>,

        /// Continue a saved session (history is read and appended)
        #[arg(short, long)]
        session: Option<String>,

        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive chat
    Chat {
        /// Resume a saved session instead of starting a new one
        #[arg(short, long)]
        session: Option<String>,

        #[arg(long)]
        income: Option<f64>,

        #[arg(long)]
        balance: Option<f64>,
    },

    /// List topics in priority order and glossary terms
    Topics,

    /// Manage saved chat sessions
    Sessions {
        #[command(subcommand)]
        command: SessionsCommand,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Initialize configuration
    Onboard,
}

#[derive(Subcommand)]
enum SessionsCommand {
    /// List sessions, most recent first
    List,
    /// Print a session's conversation
    Show { id: String },
    /// Delete a session
    Delete { id: String },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Check the config file for errors
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing. RUST_LOG wins, then --verbose, then logging.level.
    let logging = AppConfig::load().map(|c| c.logging).unwrap_or_default();
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        logging.level
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr);
    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Ask {
            question,
            income,
            balance,
            session,
            json,
        } => commands::ask::run(&question, income, balance, session, json).await?,
        Commands::Chat {
            session,
            income,
            balance,
        } => commands::chat::run(session, income, balance).await?,
        Commands::Topics => commands::topics::run()?,
        Commands::Sessions { command } => match command {
            SessionsCommand::List => commands::sessions::list().await?,
            SessionsCommand::Show { id } => commands::sessions::show(&id).await?,
            SessionsCommand::Delete { id } => commands::sessions::delete(&id).await?,
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show => commands::config_cmd::show().await?,
            ConfigCommand::Path => commands::config_cmd::path().await?,
            ConfigCommand::Validate => commands::config_cmd::validate().await?,
        },
        Commands::Onboard => commands::onboard::run().await?,
    }

    Ok(())
}
