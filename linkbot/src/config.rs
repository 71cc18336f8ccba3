//! Bot config: token, data file, log file. Loaded from env.

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN (or the CLI --token override).
    pub bot_token: String,
    /// LINKBOT_DATA_FILE: path of the JSON state snapshot.
    pub data_file: String,
    /// LOG_FILE: path of the log file.
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if
    /// provided. A missing token is the one process-fatal condition.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.or_else(|| env::var("BOT_TOKEN").ok()) {
            Some(t) if !t.trim().is_empty() => t,
            _ => anyhow::bail!(
                "BOT_TOKEN is not set; set the environment variable or pass --token"
            ),
        };
        let data_file =
            env::var("LINKBOT_DATA_FILE").unwrap_or_else(|_| "bot_data.json".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/linkbot.log".to_string());

        Ok(Self {
            bot_token,
            data_file,
            log_file,
        })
    }
}
