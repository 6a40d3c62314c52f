//! RegisterUserHandler - create an account with a hashed password.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    /// Chat identifier for reminder delivery, if the user has one.
    pub chat_id: Option<String>,
}

/// Handler for user registration. The password is hashed before the
/// entity is even constructed; plaintext never reaches storage.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        if cmd.password.len() < 8 {
            return Err(UserError::FieldInvalid(
                "password must be at least 8 characters".to_string(),
            ));
        }

        if self.repository.find_by_email(&cmd.email).await?.is_some() {
            return Err(UserError::email_taken(cmd.email));
        }

        let hash = self.hasher.hash(&cmd.password)?;
        let user = User::new(UserId::new(), cmd.email, hash, cmd.chat_id)?;
        self.repository.insert(&user).await?;

        tracing::info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::user::testing::{FakePasswordHasher, InMemoryUserRepository};

    fn handler(repo: Arc<InMemoryUserRepository>) -> RegisterUserHandler {
        RegisterUserHandler::new(repo, Arc::new(FakePasswordHasher))
    }

    fn command(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            email: email.to_string(),
            password: "correct horse".to_string(),
            chat_id: Some("424242".to_string()),
        }
    }

    #[tokio::test]
    async fn registration_stores_hash_not_plaintext() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = handler(repo.clone())
            .handle(command("a@example.com"))
            .await
            .unwrap();

        assert_eq!(user.email(), "a@example.com");
        assert_eq!(user.password_hash(), "hashed:correct horse");
        assert_eq!(repo.stored()[0].password_hash(), "hashed:correct horse");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        handler(repo.clone())
            .handle(command("a@example.com"))
            .await
            .unwrap();

        let err = handler(repo)
            .handle(command("a@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::EmailTaken(_)));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let err = handler(repo)
            .handle(RegisterUserCommand {
                email: "a@example.com".to_string(),
                password: "short".to_string(),
                chat_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::FieldInvalid(_)));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let err = handler(repo)
            .handle(command("no-at-sign"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::FieldInvalid(_)));
    }
}
