//! Wraps teloxide::Bot and implements the core [`Messenger`] trait.
//! Production code sends via Telegram; tests substitute a recording impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use linkbot_core::{LinkbotError, Messenger, Result};

/// Thin wrapper around teloxide::Bot for outbound user messages.
pub struct TelegramMessenger {
    bot: teloxide::Bot,
}

impl TelegramMessenger {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()> {
        let chat_id: i64 = user_id
            .parse()
            .map_err(|_| LinkbotError::Bot(format!("Invalid user id: {}", user_id)))?;
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| LinkbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
