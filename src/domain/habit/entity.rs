//! Habit aggregate entity.
//!
//! A habit is a scheduled action owned by one user. Non-pleasant habits
//! carry a reinforcement: either a free-text reward or a link to a
//! pleasant habit performed immediately after. Pleasant habits are the
//! terminal node of a chain and carry neither.
//!
//! Cross-field invariants (reward/link exclusivity, pleasant purity,
//! periodicity bounds, completion-time ceiling) are enforced by the rule
//! set in [`super::rules`], evaluated by the application layer before any
//! write. This entity enforces the per-field invariants only.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, HabitId, UserId};

use super::rules::HabitCandidate;

/// Maximum length for the free-text place.
pub const MAX_PLACE_LENGTH: usize = 100;
/// Maximum length for the action description.
pub const MAX_ACTION_LENGTH: usize = 200;
/// Maximum length for the reward text.
pub const MAX_AWARD_LENGTH: usize = 255;

/// Calendar date anchoring recurrence when the client supplies none.
static ANCHOR_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid anchor date"));

/// Default anchor date for new habits.
pub fn anchor_date() -> NaiveDate {
    *ANCHOR_DATE
}

/// Habit aggregate.
///
/// # Invariants
///
/// - `action` is non-empty, at most 200 characters
/// - `place` is at most 100 characters when present
/// - `award` is at most 255 characters when present
/// - `periodicity` is 1-7 days (guaranteed by the rule set before
///   construction, re-checked here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit.
    id: HabitId,

    /// User who owns this habit. Assigned server-side, never client-mutable.
    owner: UserId,

    /// Optional free-text place where the action happens.
    place: Option<String>,

    /// Time-of-day the action occurs.
    time: NaiveTime,

    /// Calendar date anchoring the recurrence.
    date: NaiveDate,

    /// Free-text description of the action.
    action: String,

    /// Pleasant habits terminate a reinforcement chain.
    is_pleasant: bool,

    /// Pleasant habit performed immediately after this one.
    related_habit: Option<HabitId>,

    /// Days between repetitions, 1-7.
    periodicity: u8,

    /// Free-text reward.
    award: Option<String>,

    /// Budgeted duration for the action, in seconds (0-120).
    complete_time_secs: Option<u32>,

    /// Published habits are readable by all users.
    is_published: bool,

    /// When the habit was created.
    created_at: DateTime<Utc>,

    /// When the habit was last updated.
    updated_at: DateTime<Utc>,
}

impl Habit {
    /// Builds a new habit from a rule-validated candidate.
    ///
    /// The caller must have run the rule set first; this only enforces
    /// per-field invariants and the periodicity domain.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `action` is blank
    /// - `FieldTooLong` if a text field exceeds its ceiling
    /// - `OutOfRange` if `periodicity` is absent or outside 1-7
    pub fn new(id: HabitId, owner: UserId, candidate: &HabitCandidate) -> Result<Self, DomainError> {
        Self::validate_fields(candidate)?;
        let periodicity = candidate
            .periodicity
            .filter(|p| (1..=7).contains(p))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::OutOfRange, "periodicity must be between 1 and 7 days")
            })?;

        let now = Utc::now();
        Ok(Self {
            id,
            owner,
            place: candidate.place.clone(),
            time: candidate.time,
            date: candidate.date,
            action: candidate.action.clone(),
            is_pleasant: candidate.is_pleasant,
            related_habit: candidate.related_habit.as_ref().map(|r| r.id),
            periodicity: periodicity as u8,
            award: candidate.award.clone(),
            complete_time_secs: candidate.complete_time_secs,
            is_published: candidate.is_published,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a habit from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: HabitId,
        owner: UserId,
        place: Option<String>,
        time: NaiveTime,
        date: NaiveDate,
        action: String,
        is_pleasant: bool,
        related_habit: Option<HabitId>,
        periodicity: u8,
        award: Option<String>,
        complete_time_secs: Option<u32>,
        is_published: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            place,
            time,
            date,
            action,
            is_pleasant,
            related_habit,
            periodicity,
            award,
            complete_time_secs,
            is_published,
            created_at,
            updated_at,
        }
    }

    /// Replaces the mutable field set with a rule-validated candidate,
    /// keeping id, owner and creation time.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Habit::new`].
    pub fn apply(&mut self, candidate: &HabitCandidate) -> Result<(), DomainError> {
        Self::validate_fields(candidate)?;
        let periodicity = candidate
            .periodicity
            .filter(|p| (1..=7).contains(p))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::OutOfRange, "periodicity must be between 1 and 7 days")
            })?;

        self.place = candidate.place.clone();
        self.time = candidate.time;
        self.date = candidate.date;
        self.action = candidate.action.clone();
        self.is_pleasant = candidate.is_pleasant;
        self.related_habit = candidate.related_habit.as_ref().map(|r| r.id);
        self.periodicity = periodicity as u8;
        self.award = candidate.award.clone();
        self.complete_time_secs = candidate.complete_time_secs;
        self.is_published = candidate.is_published;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate_fields(candidate: &HabitCandidate) -> Result<(), DomainError> {
        if candidate.action.trim().is_empty() {
            return Err(DomainError::new(ErrorCode::EmptyField, "action cannot be empty"));
        }
        if candidate.action.chars().count() > MAX_ACTION_LENGTH {
            return Err(DomainError::new(
                ErrorCode::FieldTooLong,
                format!("action exceeds {} characters", MAX_ACTION_LENGTH),
            ));
        }
        if let Some(place) = &candidate.place {
            if place.chars().count() > MAX_PLACE_LENGTH {
                return Err(DomainError::new(
                    ErrorCode::FieldTooLong,
                    format!("place exceeds {} characters", MAX_PLACE_LENGTH),
                ));
            }
        }
        if let Some(award) = &candidate.award {
            if award.chars().count() > MAX_AWARD_LENGTH {
                return Err(DomainError::new(
                    ErrorCode::FieldTooLong,
                    format!("award exceeds {} characters", MAX_AWARD_LENGTH),
                ));
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn is_pleasant(&self) -> bool {
        self.is_pleasant
    }

    pub fn related_habit(&self) -> Option<&HabitId> {
        self.related_habit.as_ref()
    }

    pub fn periodicity(&self) -> u8 {
        self.periodicity
    }

    pub fn award(&self) -> Option<&str> {
        self.award.as_deref()
    }

    pub fn complete_time_secs(&self) -> Option<u32> {
        self.complete_time_secs
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
