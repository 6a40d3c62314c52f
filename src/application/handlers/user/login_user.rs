//! LoginUserHandler - verify credentials and issue an access token.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Command to log a user in.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub user: User,
    pub access_token: String,
}

/// Handler for login. Unknown email and wrong password produce the same
/// error so the endpoint does not leak which emails are registered.
pub struct LoginUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, UserError> {
        let user = self
            .repository
            .find_by_email(&cmd.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, user.password_hash())? {
            return Err(UserError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .issue(&user)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(user_id = %user.id(), "user logged in");
        Ok(LoginUserResult { user, access_token })
    }
}
