//! UpdateHabitHandler - merge a patch over a stored habit and re-validate.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::foundation::{HabitId, UserId};
use crate::domain::habit::{is_authorized, Habit, HabitCandidate, HabitError, Operation, RuleSet};
use crate::ports::HabitRepository;

use super::resolve_related;

/// Partial update. Outer `None` means "keep the stored value"; for the
/// nullable fields an inner `None` clears the value.
#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub place: Option<Option<String>>,
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
    pub action: Option<String>,
    pub is_pleasant: Option<bool>,
    pub related_habit: Option<Option<HabitId>>,
    pub periodicity: Option<u32>,
    pub award: Option<Option<String>>,
    pub complete_time_secs: Option<Option<u32>>,
    pub is_published: Option<bool>,
}

/// Command to update a habit. Owner-only.
#[derive(Debug, Clone)]
pub struct UpdateHabitCommand {
    pub actor: UserId,
    pub habit_id: HabitId,
    pub patch: HabitPatch,
}

/// Handler for habit updates. PATCH and PUT share this path: both merge
/// the submitted fields over the stored record and run the full rule set
/// against the result.
pub struct UpdateHabitHandler {
    repository: Arc<dyn HabitRepository>,
    rules: RuleSet,
}

impl UpdateHabitHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self {
            repository,
            rules: RuleSet::standard(),
        }
    }

    pub async fn handle(&self, cmd: UpdateHabitCommand) -> Result<Habit, HabitError> {
        let mut habit = self
            .repository
            .find_by_id(&cmd.habit_id)
            .await?
            .ok_or(HabitError::NotFound(cmd.habit_id))?;

        if !is_authorized(&cmd.actor, &habit, Operation::Update) {
            return Err(HabitError::forbidden());
        }

        // Merge the patch over stored values into a complete candidate
        let related_id = cmd
            .patch
            .related_habit
            .unwrap_or_else(|| habit.related_habit().copied());
        let related = resolve_related(&self.repository, related_id).await?;

        let candidate = HabitCandidate {
            place: cmd
                .patch
                .place
                .unwrap_or_else(|| habit.place().map(str::to_string)),
            time: cmd.patch.time.unwrap_or_else(|| habit.time()),
            date: cmd.patch.date.unwrap_or_else(|| habit.date()),
            action: cmd
                .patch
                .action
                .unwrap_or_else(|| habit.action().to_string()),
            is_pleasant: cmd.patch.is_pleasant.unwrap_or_else(|| habit.is_pleasant()),
            related_habit: related,
            periodicity: Some(cmd.patch.periodicity.unwrap_or(habit.periodicity() as u32)),
            award: cmd
                .patch
                .award
                .unwrap_or_else(|| habit.award().map(str::to_string)),
            complete_time_secs: cmd
                .patch
                .complete_time_secs
                .unwrap_or_else(|| habit.complete_time_secs()),
            is_published: cmd
                .patch
                .is_published
                .unwrap_or_else(|| habit.is_published()),
        };

        let violations = self.rules.validate(&candidate);
        if !violations.is_empty() {
            return Err(HabitError::validation(violations));
        }

        habit.apply(&candidate)?;
        self.repository.update(&habit).await?;

        tracing::info!(habit_id = %habit.id(), "habit updated");
        Ok(habit)
    }
}
