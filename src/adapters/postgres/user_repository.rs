//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, chat_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.chat_id())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // The unique index on email reports as 23505
            Some(db) if db.code().as_deref() == Some("23505") => {
                DomainError::new(ErrorCode::EmailTaken, user.email().to_string())
            }
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert user: {}", e),
            ),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch user: {}", e),
                )
            })?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch user by email: {}", e),
                )
            })?;

        row.map(row_to_user).transpose()
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let get = |name: &str| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to decode users.{}", name),
        )
    };

    let id: Uuid = row.try_get("id").map_err(|_| get("id"))?;
    let email: String = row.try_get("email").map_err(|_| get("email"))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|_| get("password_hash"))?;
    let chat_id: Option<String> = row.try_get("chat_id").map_err(|_| get("chat_id"))?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(|_| get("created_at"))?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        email,
        password_hash,
        chat_id,
        created_at,
    ))
}
