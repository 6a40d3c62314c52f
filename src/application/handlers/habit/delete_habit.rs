//! DeleteHabitHandler - owner-only habit deletion.

use std::sync::Arc;

use crate::domain::foundation::{HabitId, UserId};
use crate::domain::habit::{is_authorized, HabitError, Operation};
use crate::ports::HabitRepository;

/// Command to delete a habit.
#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub actor: UserId,
    pub habit_id: HabitId,
}

/// Handler for habit deletion.
pub struct DeleteHabitHandler {
    repository: Arc<dyn HabitRepository>,
}

impl DeleteHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteHabitCommand) -> Result<(), HabitError> {
        let habit = self
            .repository
            .find_by_id(&cmd.habit_id)
            .await?
            .ok_or(HabitError::NotFound(cmd.habit_id))?;

        if !is_authorized(&cmd.actor, &habit, Operation::Delete) {
            return Err(HabitError::forbidden());
        }

        self.repository.delete(&cmd.habit_id).await?;
        tracing::info!(habit_id = %cmd.habit_id, "habit deleted");
        Ok(())
    }
}
