//! The reminder sweep.
//!
//! A read-and-notify pass over the habit table: no retries, no dedupe
//! ledger, no state mutation. Delivery is at-least-once by construction;
//! a schedule that fires more than once inside a due window will send
//! duplicates.

use std::sync::Arc;

use chrono::{Days, NaiveDateTime};

use crate::domain::foundation::DomainError;
use crate::domain::habit::Habit;
use crate::ports::{HabitRepository, MessageSender, UserRepository};

/// Outcome counts for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Habits matched by the time-of-day filter.
    pub scanned: usize,
    /// Reminders handed to the message sender.
    pub notified: u32,
    /// Sends that failed; failures are logged and dropped.
    pub failed: u32,
}

/// Periodic reminder job over habits and their owners.
pub struct ReminderJob {
    habits: Arc<dyn HabitRepository>,
    users: Arc<dyn UserRepository>,
    sender: Arc<dyn MessageSender>,
}

impl ReminderJob {
    pub fn new(
        habits: Arc<dyn HabitRepository>,
        users: Arc<dyn UserRepository>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            habits,
            users,
            sender,
        }
    }

    /// Runs one sweep at the given wall-clock instant.
    ///
    /// The selection keeps the inherited trigger condition: only habits
    /// whose time-of-day is still ahead of `now` are considered, so a
    /// habit whose time has already passed today is silently skipped
    /// until the next day's sweep. Whether that is the intended contract
    /// is an open question with stakeholders; do not "fix" it here
    /// without a decision.
    pub async fn run_once(&self, now: NaiveDateTime) -> Result<SweepReport, DomainError> {
        let candidates = self.habits.find_scheduled_from(now.time()).await?;
        let mut report = SweepReport {
            scanned: candidates.len(),
            ..SweepReport::default()
        };

        for habit in &candidates {
            let due = habit
                .date()
                .checked_add_days(Days::new(u64::from(habit.periodicity())));
            if due != Some(now.date()) {
                continue;
            }

            let owner = match self.users.find_by_id(habit.owner()).await? {
                Some(owner) => owner,
                None => {
                    tracing::warn!(habit_id = %habit.id(), "habit owner no longer exists");
                    continue;
                }
            };
            let Some(chat_id) = owner.chat_id() else {
                continue;
            };

            let text = format_reminder(habit);
            match self.sender.send_message(&text, chat_id).await {
                Ok(()) => {
                    report.notified += 1;
                    tracing::debug!(habit_id = %habit.id(), "reminder sent");
                }
                Err(e) => {
                    // Fire-and-forget: log and move on
                    report.failed += 1;
                    tracing::warn!(habit_id = %habit.id(), error = %e, "reminder send failed");
                }
            }
        }

        tracing::info!(
            scanned = report.scanned,
            notified = report.notified,
            failed = report.failed,
            "reminder sweep finished"
        );
        Ok(report)
    }
}

/// Builds the reminder text from action, place, and completion budget.
fn format_reminder(habit: &Habit) -> String {
    let mut text = format!("Hi! It's time for {}", habit.action());
    if let Some(place) = habit.place() {
        text.push_str(&format!(" at {}", place));
    }
    text.push('.');
    if let Some(secs) = habit.complete_time_secs() {
        text.push_str(&format!(" You'll need just {} seconds.", secs));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::habit::testing::InMemoryHabitRepository;
    use crate::application::handlers::user::testing::InMemoryUserRepository;
    use crate::domain::foundation::{HabitId, UserId};
    use crate::domain::habit::HabitCandidate;
    use crate::domain::user::User;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Mutex;

    struct RecordingSender {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingSender {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn messages(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageSender for RecordingSender {
        async fn send_message(&self, text: &str, chat_id: &str) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(
                    crate::domain::foundation::ErrorCode::InternalError,
                    "delivery failed",
                ));
            }
            self.sent
                .lock()
                .unwrap()
                .push((text.to_string(), chat_id.to_string()));
            Ok(())
        }
    }

    fn habit_at(
        owner: UserId,
        date: NaiveDate,
        time: NaiveTime,
        periodicity: u32,
    ) -> crate::domain::habit::Habit {
        let candidate = HabitCandidate {
            place: Some("the gym".to_string()),
            time,
            date,
            action: "lift weights".to_string(),
            is_pleasant: false,
            related_habit: None,
            periodicity: Some(periodicity),
            award: None,
            complete_time_secs: Some(110),
            is_published: false,
        };
        crate::domain::habit::Habit::new(HabitId::new(), owner, &candidate).unwrap()
    }

    fn user_with_chat(chat_id: Option<&str>) -> User {
        User::new(
            UserId::new(),
            "owner@example.com",
            "hash",
            chat_id.map(str::to_string),
        )
        .unwrap()
    }

    fn now(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[tokio::test]
    async fn due_habit_later_today_triggers_a_reminder() {
        let owner = user_with_chat(Some("777"));
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(18, 0, 0).unwrap(), 2);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::new());

        let job = ReminderJob::new(habits, users, sender.clone());
        // Due date = anchor + 2 days
        let report = job
            .run_once(now(anchor + Days::new(2), 9, 0))
            .await
            .unwrap();

        assert_eq!(report.notified, 1);
        let messages = sender.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].1, "777");
        assert!(messages[0].0.contains("lift weights"));
        assert!(messages[0].0.contains("the gym"));
        assert!(messages[0].0.contains("110 seconds"));
    }

    #[tokio::test]
    async fn habit_whose_time_already_passed_is_skipped() {
        let owner = user_with_chat(Some("777"));
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(8, 0, 0).unwrap(), 2);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::new());

        let job = ReminderJob::new(habits, users, sender.clone());
        // It is already 09:00; the 08:00 habit falls outside the window
        let report = job
            .run_once(now(anchor + Days::new(2), 9, 0))
            .await
            .unwrap();

        assert_eq!(report.scanned, 0);
        assert_eq!(report.notified, 0);
        assert!(sender.messages().is_empty());
    }

    #[tokio::test]
    async fn habit_not_due_today_is_skipped() {
        let owner = user_with_chat(Some("777"));
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(18, 0, 0).unwrap(), 3);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::new());

        let job = ReminderJob::new(habits, users, sender.clone());
        // Two days after the anchor, but periodicity is three
        let report = job
            .run_once(now(anchor + Days::new(2), 9, 0))
            .await
            .unwrap();

        assert_eq!(report.scanned, 1);
        assert_eq!(report.notified, 0);
    }

    #[tokio::test]
    async fn owner_without_chat_id_is_never_notified() {
        let owner = user_with_chat(None);
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(18, 0, 0).unwrap(), 1);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::new());

        let job = ReminderJob::new(habits, users, sender.clone());
        let report = job
            .run_once(now(anchor + Days::new(1), 9, 0))
            .await
            .unwrap();

        assert_eq!(report.notified, 0);
        assert!(sender.messages().is_empty());
    }

    #[tokio::test]
    async fn send_failures_are_counted_not_raised() {
        let owner = user_with_chat(Some("777"));
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(18, 0, 0).unwrap(), 1);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::failing());

        let job = ReminderJob::new(habits, users, sender);
        let report = job
            .run_once(now(anchor + Days::new(1), 9, 0))
            .await
            .unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.notified, 0);
    }

    #[tokio::test]
    async fn repeated_sweeps_duplicate_notifications() {
        let owner = user_with_chat(Some("777"));
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let habit = habit_at(*owner.id(), anchor, NaiveTime::from_hms_opt(18, 0, 0).unwrap(), 1);

        let habits = Arc::new(InMemoryHabitRepository::with_habits(vec![habit]));
        let users = Arc::new(InMemoryUserRepository::new());
        users.users.lock().unwrap().push(owner);
        let sender = Arc::new(RecordingSender::new());

        let job = ReminderJob::new(habits, users, sender.clone());
        let at = now(anchor + Days::new(1), 9, 0);
        job.run_once(at).await.unwrap();
        job.run_once(at).await.unwrap();

        // At-least-once, no dedupe ledger
        assert_eq!(sender.messages().len(), 2);
    }
}
