//! Token service port for bearer authentication.
//!
//! Issues access tokens at login and validates them in the HTTP
//! middleware, mapping claims to an [`AuthenticatedUser`]. Implementations
//! must check signature and expiry and never trust unverified claims.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::domain::user::User;

/// Issues and validates access tokens.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issue a signed access token for a registered user.
    async fn issue(&self, user: &User) -> Result<String, AuthError>;

    /// Validate a raw token (without the `Bearer ` prefix) and extract
    /// the authenticated user.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` for malformed or badly signed tokens
    /// - `TokenExpired` for expired tokens
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
