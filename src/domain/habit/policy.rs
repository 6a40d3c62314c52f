//! Owner-based access policy for habits.
//!
//! Published habits are readable by anyone; everything else is
//! owner-only. There are no roles and no admin override.

use crate::domain::foundation::UserId;

use super::entity::Habit;

/// Protected habit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Update,
    Delete,
}

/// Whether `actor` may perform `operation` on `habit`.
pub fn is_authorized(actor: &UserId, habit: &Habit, operation: Operation) -> bool {
    match operation {
        Operation::Read => habit.is_published() || habit.owner() == actor,
        Operation::Update | Operation::Delete => habit.owner() == actor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::HabitId;
    use crate::domain::habit::rules::HabitCandidate;
    use chrono::{NaiveDate, NaiveTime};

    fn habit(owner: UserId, published: bool) -> Habit {
        let candidate = HabitCandidate {
            place: None,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            action: "read a chapter".to_string(),
            is_pleasant: false,
            related_habit: None,
            periodicity: Some(1),
            award: None,
            complete_time_secs: None,
            is_published: published,
        };
        Habit::new(HabitId::new(), owner, &candidate).unwrap()
    }

    #[test]
    fn owner_may_do_everything() {
        let owner = UserId::new();
        let habit = habit(owner, false);
        assert!(is_authorized(&owner, &habit, Operation::Read));
        assert!(is_authorized(&owner, &habit, Operation::Update));
        assert!(is_authorized(&owner, &habit, Operation::Delete));
    }

    #[test]
    fn stranger_is_denied_on_unpublished_habit() {
        let stranger = UserId::new();
        let habit = habit(UserId::new(), false);
        assert!(!is_authorized(&stranger, &habit, Operation::Read));
        assert!(!is_authorized(&stranger, &habit, Operation::Update));
        assert!(!is_authorized(&stranger, &habit, Operation::Delete));
    }

    #[test]
    fn published_habit_is_readable_but_not_writable_by_strangers() {
        let stranger = UserId::new();
        let habit = habit(UserId::new(), true);
        assert!(is_authorized(&stranger, &habit, Operation::Read));
        assert!(!is_authorized(&stranger, &habit, Operation::Update));
        assert!(!is_authorized(&stranger, &habit, Operation::Delete));
    }
}
