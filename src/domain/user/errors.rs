//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors raised by user operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// User was not found.
    NotFound(UserId),
    /// The email is already registered.
    EmailTaken(String),
    /// Registration input failed validation.
    FieldInvalid(String),
    /// Email/password pair did not match.
    InvalidCredentials,
    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        UserError::EmailTaken(email.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::EmailTaken(_) => ErrorCode::EmailTaken,
            UserError::FieldInvalid(_) => ErrorCode::ValidationFailed,
            UserError::InvalidCredentials => ErrorCode::Unauthorized,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("User not found: {}", id),
            UserError::EmailTaken(email) => format!("Email already registered: {}", email),
            UserError::FieldInvalid(msg) => msg.clone(),
            UserError::InvalidCredentials => "Invalid credentials".to_string(),
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EmptyField | ErrorCode::InvalidFormat | ErrorCode::ValidationFailed => {
                UserError::FieldInvalid(err.message)
            }
            ErrorCode::EmailTaken => UserError::EmailTaken(err.message),
            _ => UserError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_taken_maps_to_conflict_code() {
        assert_eq!(
            UserError::email_taken("a@b.example").code(),
            ErrorCode::EmailTaken
        );
    }

    #[test]
    fn invalid_credentials_stay_vague() {
        assert_eq!(UserError::InvalidCredentials.message(), "Invalid credentials");
    }
}
