use crate::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Outbound status channel. Exactly one message is sent per run.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages to a fixed chat via the Telegram Bot API.
pub struct TelegramNotifier {
    http: Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(http: Client, token: &str, chat_id: &str) -> Self {
        Self {
            http,
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.endpoint())
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| SyncError::Notify(e.to_string()))?;

        let status = resp.status();
        let body: TelegramResponse = resp
            .json()
            .await
            .map_err(|e| SyncError::Notify(format!("{status}: {e}")))?;
        if !body.ok {
            return Err(SyncError::Notify(
                body.description.unwrap_or_else(|| status.to_string()),
            ));
        }
        Ok(())
    }
}
