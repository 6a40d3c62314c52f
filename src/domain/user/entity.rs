//! User entity.
//!
//! Users own habits and optionally carry a chat identifier for reminder
//! delivery. Only the argon2 hash of the password is ever stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    /// Argon2 PHC-format hash; never the plaintext password.
    password_hash: String,
    /// Chat identifier for reminder messages, if the user registered one.
    chat_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with an already-hashed password.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the email is blank or has no `@`
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        chat_id: Option<String>,
    ) -> Result<Self, DomainError> {
        let email = email.into();
        Self::validate_email(&email)?;
        Ok(Self {
            id,
            email,
            password_hash: password_hash.into(),
            chat_id,
            created_at: Utc::now(),
        })
    }

    /// Reconstitutes a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        email: String,
        password_hash: String,
        chat_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            chat_id,
            created_at,
        }
    }

    fn validate_email(email: &str) -> Result<(), DomainError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(DomainError::new(ErrorCode::EmptyField, "email cannot be empty"));
        }
        // Deliverability is the mail system's problem; only the shape is checked.
        if !trimmed.contains('@') || trimmed.starts_with('@') || trimmed.ends_with('@') {
            return Err(DomainError::new(
                ErrorCode::InvalidFormat,
                "email must be a valid address",
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
