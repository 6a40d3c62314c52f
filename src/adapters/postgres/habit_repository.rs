//! PostgreSQL implementation of HabitRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, HabitId, Page, PageSlice, UserId};
use crate::domain::habit::Habit;
use crate::ports::HabitRepository;

/// PostgreSQL implementation of HabitRepository.
#[derive(Clone)]
pub struct PostgresHabitRepository {
    pool: PgPool,
}

impl PostgresHabitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HabitRepository for PostgresHabitRepository {
    async fn insert(&self, habit: &Habit) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO habits (
                id, owner_id, place, time, date, action, is_pleasant,
                related_habit_id, periodicity, award, complete_time_secs,
                is_published, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(habit.id().as_uuid())
        .bind(habit.owner().as_uuid())
        .bind(habit.place())
        .bind(habit.time())
        .bind(habit.date())
        .bind(habit.action())
        .bind(habit.is_pleasant())
        .bind(habit.related_habit().map(|id| *id.as_uuid()))
        .bind(i16::from(habit.periodicity()))
        .bind(habit.award())
        .bind(habit.complete_time_secs().map(|s| s as i32))
        .bind(habit.is_published())
        .bind(habit.created_at())
        .bind(habit.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert habit: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, habit: &Habit) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE habits SET
                place = $2,
                time = $3,
                date = $4,
                action = $5,
                is_pleasant = $6,
                related_habit_id = $7,
                periodicity = $8,
                award = $9,
                complete_time_secs = $10,
                is_published = $11,
                updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(habit.id().as_uuid())
        .bind(habit.place())
        .bind(habit.time())
        .bind(habit.date())
        .bind(habit.action())
        .bind(habit.is_pleasant())
        .bind(habit.related_habit().map(|id| *id.as_uuid()))
        .bind(i16::from(habit.periodicity()))
        .bind(habit.award())
        .bind(habit.complete_time_secs().map(|s| s as i32))
        .bind(habit.is_published())
        .bind(habit.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update habit: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::HabitNotFound,
                format!("Habit not found: {}", habit.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let row = sqlx::query("SELECT * FROM habits WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch habit: {}", e),
                )
            })?;

        row.map(row_to_habit).transpose()
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete habit: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::HabitNotFound,
                format!("Habit not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn list_published(&self, page: Page) -> Result<PageSlice<Habit>, DomainError> {
        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM habits WHERE is_published = TRUE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to count published habits: {}", e),
                    )
                })?;

        let rows = sqlx::query(
            r#"
            SELECT * FROM habits
            WHERE is_published = TRUE
            ORDER BY action, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list published habits: {}", e),
            )
        })?;

        let habits: Result<Vec<Habit>, DomainError> = rows.into_iter().map(row_to_habit).collect();
        Ok(PageSlice::new(habits?, total.0 as u64, page))
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: Page,
    ) -> Result<PageSlice<Habit>, DomainError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM habits WHERE owner_id = $1")
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to count habits by owner: {}", e),
                )
            })?;

        let rows = sqlx::query(
            r#"
            SELECT * FROM habits
            WHERE owner_id = $1
            ORDER BY action, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner.as_uuid())
        .bind(i64::from(page.limit()))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list habits by owner: {}", e),
            )
        })?;

        let habits: Result<Vec<Habit>, DomainError> = rows.into_iter().map(row_to_habit).collect();
        Ok(PageSlice::new(habits?, total.0 as u64, page))
    }

    async fn find_scheduled_from(&self, from: NaiveTime) -> Result<Vec<Habit>, DomainError> {
        let rows = sqlx::query("SELECT * FROM habits WHERE time >= $1")
            .bind(from)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch scheduled habits: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_habit).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn row_to_habit(row: PgRow) -> Result<Habit, DomainError> {
    let id: Uuid = column(&row, "id")?;
    let owner_id: Uuid = column(&row, "owner_id")?;
    let place: Option<String> = column(&row, "place")?;
    let time: NaiveTime = column(&row, "time")?;
    let date: NaiveDate = column(&row, "date")?;
    let action: String = column(&row, "action")?;
    let is_pleasant: bool = column(&row, "is_pleasant")?;
    let related_habit_id: Option<Uuid> = column(&row, "related_habit_id")?;
    let periodicity: i16 = column(&row, "periodicity")?;
    let award: Option<String> = column(&row, "award")?;
    let complete_time_secs: Option<i32> = column(&row, "complete_time_secs")?;
    let is_published: bool = column(&row, "is_published")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Habit::reconstitute(
        HabitId::from_uuid(id),
        UserId::from_uuid(owner_id),
        place,
        time,
        date,
        action,
        is_pleasant,
        related_habit_id.map(HabitId::from_uuid),
        periodicity as u8,
        award,
        complete_time_secs.map(|s| s as u32),
        is_published,
        created_at,
        updated_at,
    ))
}
