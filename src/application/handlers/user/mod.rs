//! User command handlers: registration and login.

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};

#[cfg(test)]
pub(crate) mod testing {
    //! Shared mocks for user handler tests.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::foundation::{
        AuthError, AuthenticatedUser, DomainError, ErrorCode, UserId,
    };
    use crate::domain::user::User;
    use crate::ports::{PasswordHasher, TokenService, UserRepository};

    pub struct InMemoryUserRepository {
        pub users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
            }
        }

        pub fn stored(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn insert(&self, user: &User) -> Result<(), DomainError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email() == user.email()) {
                return Err(DomainError::new(
                    ErrorCode::EmailTaken,
                    user.email().to_string(),
                ));
            }
            users.push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id() == id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email() == email)
                .cloned())
        }
    }

    /// Reversible fake: hash is `hashed:<password>`, so tests can assert
    /// the plaintext never reaches storage.
    pub struct FakePasswordHasher;

    impl PasswordHasher for FakePasswordHasher {
        fn hash(&self, password: &str) -> Result<String, DomainError> {
            Ok(format!("hashed:{}", password))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    pub struct FakeTokenService;

    #[async_trait]
    impl TokenService for FakeTokenService {
        async fn issue(&self, user: &User) -> Result<String, AuthError> {
            Ok(format!("token-for-{}", user.id()))
        }

        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            token
                .strip_prefix("token-for-")
                .and_then(|id| id.parse::<UserId>().ok())
                .map(|id| AuthenticatedUser::new(id, "test@example.com"))
                .ok_or(AuthError::InvalidToken)
        }
    }
}
