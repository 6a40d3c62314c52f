//! Outbound messaging port.
//!
//! The reminder job depends only on this capability: deliver a text to a
//! chat identifier. No delivery guarantee is assumed by the core; the job
//! treats failures as fire-and-forget.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Sends a text message to a chat identifier.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, text: &str, chat_id: &str) -> Result<(), DomainError>;
}
