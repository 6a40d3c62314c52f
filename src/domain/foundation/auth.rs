//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a bearer
//! token. They carry no provider dependencies; the `TokenService` port
//! populates them after validating a JWT.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the token's subject claim.
    pub id: UserId,
    /// User's email address from the token claims.
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during token issuance or validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Token is malformed or its signature does not verify.
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature is valid but the token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Email/password pair did not match a registered user.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be created or checked for an internal reason.
    #[error("Authentication service error: {0}")]
    ServiceError(String),
}
