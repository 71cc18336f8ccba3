//! CLI for the linkbot binary.

use clap::{Parser, Subcommand};

/// Root CLI: holds a single subcommand. Parsed by `main.rs`.
#[derive(Parser)]
#[command(name = "linkbot")]
#[command(about = "Invite-link rotation bot: rotates channel links on a timer and serves them to subscribers.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot.
    Run {
        /// Bot token. If omitted, BOT_TOKEN from env is used.
        #[arg(long)]
        token: Option<String>,
    },
}
