//! CreateHabitHandler - create a habit owned by the requester.

use std::sync::Arc;

use crate::domain::foundation::{HabitId, UserId};
use crate::domain::habit::{Habit, HabitError, RuleSet};
use crate::ports::HabitRepository;

use super::{resolve_related, HabitFields};

/// Command to create a new habit. The owner is always the authenticated
/// requester; any client-supplied owner has already been discarded by the
/// HTTP layer.
#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub owner: UserId,
    pub fields: HabitFields,
}

/// Handler for habit creation.
pub struct CreateHabitHandler {
    repository: Arc<dyn HabitRepository>,
    rules: RuleSet,
}

impl CreateHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self {
            repository,
            rules: RuleSet::standard(),
        }
    }

    pub async fn handle(&self, cmd: CreateHabitCommand) -> Result<Habit, HabitError> {
        // 1. Resolve the reinforcement link so rules stay pure
        let related = resolve_related(&self.repository, cmd.fields.related_habit).await?;

        // 2. Run the full rule set; all violations are reported together
        let candidate = cmd.fields.into_candidate(related);
        let violations = self.rules.validate(&candidate);
        if !violations.is_empty() {
            return Err(HabitError::validation(violations));
        }

        // 3. Single atomic write
        let habit = Habit::new(HabitId::new(), cmd.owner, &candidate)?;
        self.repository.insert(&habit).await?;

        tracing::info!(habit_id = %habit.id(), owner = %habit.owner(), "habit created");
        Ok(habit)
    }
}
