//! Habit repository port.
//!
//! Contract for persisting and querying habits. One atomic write per
//! create/update; the rule set runs before the repository is touched.

use async_trait::async_trait;
use chrono::NaiveTime;

use crate::domain::foundation::{DomainError, HabitId, Page, PageSlice, UserId};
use crate::domain::habit::Habit;

/// Repository port for habit persistence.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert a new habit.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, habit: &Habit) -> Result<(), DomainError>;

    /// Update an existing habit.
    ///
    /// # Errors
    ///
    /// - `HabitNotFound` if the habit does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, habit: &Habit) -> Result<(), DomainError>;

    /// Find a habit by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// Delete a habit.
    ///
    /// # Errors
    ///
    /// - `HabitNotFound` if the habit does not exist
    async fn delete(&self, id: &HabitId) -> Result<(), DomainError>;

    /// Published habits, ordered by action, with the total count.
    async fn list_published(&self, page: Page) -> Result<PageSlice<Habit>, DomainError>;

    /// All habits owned by one user, ordered by action, with the total count.
    async fn list_by_owner(
        &self,
        owner: &UserId,
        page: Page,
    ) -> Result<PageSlice<Habit>, DomainError>;

    /// Habits whose time-of-day is at or after `from`, for the reminder sweep.
    async fn find_scheduled_from(&self, from: NaiveTime) -> Result<Vec<Habit>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn HabitRepository) {}
    }
}
