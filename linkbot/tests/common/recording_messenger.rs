//! Mock implementation of [`linkbot_core::Messenger`] for integration tests.
//!
//! Records every `send_text` call so tests can assert on recipients and text
//! without hitting Telegram; selected recipients can be made to fail delivery.

use async_trait::async_trait;
use linkbot_core::{LinkbotError, Messenger};
use std::sync::Mutex;

/// Mock Messenger that records sends and fails for a configured set of ids.
pub struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
    fail_for: Vec<String>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::failing_for(&[])
    }

    /// Creates a messenger whose `send_text` fails for the given user ids.
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Every successful (user_id, text) send so far.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, user_id: &str, text: &str) -> linkbot_core::Result<()> {
        if self.fail_for.iter().any(|id| id == user_id) {
            return Err(LinkbotError::Bot(format!(
                "recipient {} unreachable",
                user_id
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((user_id.to_string(), text.to_string()));
        Ok(())
    }
}
