//! Telegram Bot API implementation of the MessageSender port.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::MessageSender;

/// Sends reminder texts through the Telegram `sendMessage` method.
pub struct TelegramMessageSender {
    client: reqwest::Client,
    api_base: String,
    bot_token: SecretString,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramMessageSender {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>, bot_token: SecretString) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            bot_token,
        }
    }

    fn send_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token.expose_secret()
        )
    }
}

#[async_trait]
impl MessageSender for TelegramMessageSender {
    async fn send_message(&self, text: &str, chat_id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.send_url())
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Telegram request failed: {}", e),
                )
            })?;

        let status = response.status();
        let body: SendMessageResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Telegram response unreadable: {}", e),
            )
        })?;

        if !status.is_success() || !body.ok {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!(
                    "Telegram rejected message ({}): {}",
                    status,
                    body.description.unwrap_or_else(|| "no description".to_string())
                ),
            ));
        }

        Ok(())
    }
}
