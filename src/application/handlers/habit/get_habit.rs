//! GetHabitHandler - fetch one habit, policy-checked.

use std::sync::Arc;

use crate::domain::foundation::{HabitId, UserId};
use crate::domain::habit::{is_authorized, Habit, HabitError, Operation};
use crate::ports::HabitRepository;

/// Query for a single habit.
#[derive(Debug, Clone)]
pub struct GetHabitQuery {
    pub actor: UserId,
    pub habit_id: HabitId,
}

/// Handler for habit retrieval. Published habits are readable by anyone;
/// unpublished ones only by their owner.
pub struct GetHabitHandler {
    repository: Arc<dyn HabitRepository>,
}

impl GetHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetHabitQuery) -> Result<Habit, HabitError> {
        let habit = self
            .repository
            .find_by_id(&query.habit_id)
            .await?
            .ok_or(HabitError::NotFound(query.habit_id))?;

        if !is_authorized(&query.actor, &habit, Operation::Read) {
            return Err(HabitError::forbidden());
        }

        Ok(habit)
    }
}
