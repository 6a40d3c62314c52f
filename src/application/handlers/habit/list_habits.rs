//! List handlers: the public feed and the requester's own habits.

use std::sync::Arc;

use crate::domain::foundation::{Page, PageSlice, UserId};
use crate::domain::habit::{Habit, HabitError};
use crate::ports::HabitRepository;

/// Query for the public feed of published habits.
#[derive(Debug, Clone)]
pub struct ListPublishedHabitsQuery {
    pub page: Page,
}

/// Handler for the public list. No authentication required.
pub struct ListPublishedHabitsHandler {
    repository: Arc<dyn HabitRepository>,
}

impl ListPublishedHabitsHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListPublishedHabitsQuery,
    ) -> Result<PageSlice<Habit>, HabitError> {
        Ok(self.repository.list_published(query.page).await?)
    }
}

/// Query for the requester's own habits.
#[derive(Debug, Clone)]
pub struct ListOwnHabitsQuery {
    pub actor: UserId,
    pub page: Page,
}

/// Handler for the personal list; scoped to the actor, so no further
/// policy check is needed.
pub struct ListOwnHabitsHandler {
    repository: Arc<dyn HabitRepository>,
}

impl ListOwnHabitsHandler {
    pub fn new(repository: Arc<dyn HabitRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListOwnHabitsQuery) -> Result<PageSlice<Habit>, HabitError> {
        Ok(self
            .repository
            .list_by_owner(&query.actor, query.page)
            .await?)
    }
}
