//! Habit domain: entity, validation rule set, owner policy.

pub mod entity;
pub mod errors;
pub mod policy;
pub mod rules;

pub use entity::{anchor_date, Habit, MAX_ACTION_LENGTH, MAX_AWARD_LENGTH, MAX_PLACE_LENGTH};
pub use errors::HabitError;
pub use policy::{is_authorized, Operation};
pub use rules::{
    HabitCandidate, HabitRule, RelatedHabitRef, RuleSet, MAX_COMPLETE_TIME_SECS, MAX_PERIODICITY,
    MIN_PERIODICITY,
};
