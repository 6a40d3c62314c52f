//! Habit command and query handlers.
//!
//! Every write path builds a complete [`HabitCandidate`], resolves the
//! related-habit link, runs the rule set, and only then touches the
//! repository. The authenticated actor is always passed in explicitly.

mod create_habit;
mod delete_habit;
mod get_habit;
mod list_habits;
mod update_habit;

pub use create_habit::{CreateHabitCommand, CreateHabitHandler};
pub use delete_habit::{DeleteHabitCommand, DeleteHabitHandler};
pub use get_habit::{GetHabitHandler, GetHabitQuery};
pub use list_habits::{
    ListOwnHabitsHandler, ListOwnHabitsQuery, ListPublishedHabitsHandler, ListPublishedHabitsQuery,
};
pub use update_habit::{HabitPatch, UpdateHabitCommand, UpdateHabitHandler};

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::foundation::HabitId;
use crate::domain::habit::{anchor_date, HabitCandidate, HabitError, RelatedHabitRef};
use crate::ports::HabitRepository;

/// Raw submitted field set for a create.
#[derive(Debug, Clone)]
pub struct HabitFields {
    pub place: Option<String>,
    pub time: NaiveTime,
    /// Defaults to the recurrence anchor date when omitted.
    pub date: Option<NaiveDate>,
    pub action: String,
    pub is_pleasant: bool,
    pub related_habit: Option<HabitId>,
    pub periodicity: Option<u32>,
    pub award: Option<String>,
    pub complete_time_secs: Option<u32>,
    pub is_published: bool,
}

impl HabitFields {
    /// Builds the rule-set candidate, with the related link resolved.
    pub(crate) fn into_candidate(self, related: Option<RelatedHabitRef>) -> HabitCandidate {
        HabitCandidate {
            place: self.place,
            time: self.time,
            date: self.date.unwrap_or_else(anchor_date),
            action: self.action,
            is_pleasant: self.is_pleasant,
            related_habit: related,
            periodicity: self.periodicity,
            award: self.award,
            complete_time_secs: self.complete_time_secs,
            is_published: self.is_published,
        }
    }
}

/// Resolves a related-habit id to the `{id, is_pleasant}` pair the rule
/// set inspects.
pub(crate) async fn resolve_related(
    repository: &Arc<dyn HabitRepository>,
    id: Option<HabitId>,
) -> Result<Option<RelatedHabitRef>, HabitError> {
    match id {
        None => Ok(None),
        Some(id) => {
            let linked = repository
                .find_by_id(&id)
                .await?
                .ok_or(HabitError::RelatedHabitNotFound(id))?;
            Ok(Some(RelatedHabitRef {
                id: *linked.id(),
                is_pleasant: linked.is_pleasant(),
            }))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory habit repository shared by the handler unit tests.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveTime;

    use crate::domain::foundation::{
        DomainError, ErrorCode, HabitId, Page, PageSlice, UserId,
    };
    use crate::domain::habit::Habit;
    use crate::ports::HabitRepository;

    pub struct InMemoryHabitRepository {
        pub habits: Mutex<Vec<Habit>>,
        pub fail_writes: bool,
    }

    impl InMemoryHabitRepository {
        pub fn new() -> Self {
            Self {
                habits: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        pub fn with_habits(habits: Vec<Habit>) -> Self {
            Self {
                habits: Mutex::new(habits),
                fail_writes: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                habits: Mutex::new(Vec::new()),
                fail_writes: true,
            }
        }

        pub fn stored(&self) -> Vec<Habit> {
            self.habits.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HabitRepository for InMemoryHabitRepository {
        async fn insert(&self, habit: &Habit) -> Result<(), DomainError> {
            if self.fail_writes {
                return Err(DomainError::new(ErrorCode::DatabaseError, "insert failed"));
            }
            self.habits.lock().unwrap().push(habit.clone());
            Ok(())
        }

        async fn update(&self, habit: &Habit) -> Result<(), DomainError> {
            if self.fail_writes {
                return Err(DomainError::new(ErrorCode::DatabaseError, "update failed"));
            }
            let mut habits = self.habits.lock().unwrap();
            match habits.iter().position(|h| h.id() == habit.id()) {
                Some(pos) => {
                    habits[pos] = habit.clone();
                    Ok(())
                }
                None => Err(DomainError::new(
                    ErrorCode::HabitNotFound,
                    format!("Habit not found: {}", habit.id()),
                )),
            }
        }

        async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
            Ok(self
                .habits
                .lock()
                .unwrap()
                .iter()
                .find(|h| h.id() == id)
                .cloned())
        }

        async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
            let mut habits = self.habits.lock().unwrap();
            match habits.iter().position(|h| h.id() == id) {
                Some(pos) => {
                    habits.remove(pos);
                    Ok(())
                }
                None => Err(DomainError::new(
                    ErrorCode::HabitNotFound,
                    format!("Habit not found: {}", id),
                )),
            }
        }

        async fn list_published(&self, page: Page) -> Result<PageSlice<Habit>, DomainError> {
            let mut published: Vec<Habit> = self
                .habits
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.is_published())
                .cloned()
                .collect();
            published.sort_by(|a, b| a.action().cmp(b.action()));
            Ok(paginate(published, page))
        }

        async fn list_by_owner(
            &self,
            owner: &UserId,
            page: Page,
        ) -> Result<PageSlice<Habit>, DomainError> {
            let mut owned: Vec<Habit> = self
                .habits
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.owner() == owner)
                .cloned()
                .collect();
            owned.sort_by(|a, b| a.action().cmp(b.action()));
            Ok(paginate(owned, page))
        }

        async fn find_scheduled_from(&self, from: NaiveTime) -> Result<Vec<Habit>, DomainError> {
            Ok(self
                .habits
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.time() >= from)
                .cloned()
                .collect())
        }
    }

    fn paginate(all: Vec<Habit>, page: Page) -> PageSlice<Habit> {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        PageSlice::new(items, total, page)
    }
}
