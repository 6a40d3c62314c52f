//! Habit validation rule set.
//!
//! Five cross-field rules evaluated against a [`HabitCandidate`], the
//! full proposed field set (for updates, existing values already merged
//! with the submitted patch). Each rule is a typed object bound to the
//! fields it inspects; the set runs in a fixed order and collects every
//! applicable violation instead of stopping at the first, so one invalid
//! submission surfaces all of its problems at once.
//!
//! Violations are plain data. The rule set never fails on
//! malformed-but-representable input; callers reject the write when the
//! returned list is non-empty.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::foundation::{HabitId, Violation};

/// Completion budget ceiling, in seconds.
pub const MAX_COMPLETE_TIME_SECS: u32 = 120;
/// Inclusive periodicity bounds, in days.
pub const MIN_PERIODICITY: u32 = 1;
pub const MAX_PERIODICITY: u32 = 7;

/// The linked habit, resolved ahead of validation so rules stay pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedHabitRef {
    pub id: HabitId,
    pub is_pleasant: bool,
}

/// Proposed habit field set, as seen by the rule set.
///
/// For creates this is the full submission plus defaults; for updates the
/// application layer overlays the submitted fields onto the stored habit
/// before validating, so rules always see a complete record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitCandidate {
    pub place: Option<String>,
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub action: String,
    pub is_pleasant: bool,
    pub related_habit: Option<RelatedHabitRef>,
    pub periodicity: Option<u32>,
    pub award: Option<String>,
    pub complete_time_secs: Option<u32>,
    pub is_published: bool,
}

/// A single validation rule over a complete candidate.
///
/// Implementations are stateless unit structs bound at definition time to
/// the fields they inspect.
pub trait HabitRule: Send + Sync {
    /// Stable rule identifier, used in violation payloads and logs.
    fn name(&self) -> &'static str;

    /// Returns the violation this rule raises, if any.
    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation>;
}

/// A habit may carry a reward or a related habit, never both.
pub struct AwardOrLinkExclusive;

impl HabitRule for AwardOrLinkExclusive {
    fn name(&self) -> &'static str {
        "award_or_link_exclusive"
    }

    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation> {
        if candidate.award.is_some() && candidate.related_habit.is_some() {
            Some(Violation::new(
                self.name(),
                "a habit may have either a reward or a related habit, not both",
            ))
        } else {
            None
        }
    }
}

/// Pleasant habits are terminal: no reward, no further link.
pub struct PleasantHabitPurity;

impl HabitRule for PleasantHabitPurity {
    fn name(&self) -> &'static str {
        "pleasant_habit_purity"
    }

    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation> {
        if candidate.is_pleasant && (candidate.award.is_some() || candidate.related_habit.is_some())
        {
            Some(Violation::new(
                self.name(),
                "a pleasant habit cannot have a reward or a related habit",
            ))
        } else {
            None
        }
    }
}

/// Only pleasant habits may be linked as reinforcement.
pub struct RelatedHabitPleasant;

impl HabitRule for RelatedHabitPleasant {
    fn name(&self) -> &'static str {
        "related_habit_pleasant"
    }

    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation> {
        match &candidate.related_habit {
            Some(linked) if !linked.is_pleasant => Some(Violation::new(
                self.name(),
                "the related habit must itself be flagged pleasant",
            )),
            _ => None,
        }
    }
}

/// The completion budget may not exceed two minutes.
pub struct CompleteTimeCeiling;

impl HabitRule for CompleteTimeCeiling {
    fn name(&self) -> &'static str {
        "complete_time_ceiling"
    }

    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation> {
        match candidate.complete_time_secs {
            Some(secs) if secs > MAX_COMPLETE_TIME_SECS => Some(Violation::new(
                self.name(),
                "completion time may not exceed 2 minutes",
            )),
            _ => None,
        }
    }
}

/// A habit must repeat at least weekly and at most daily.
pub struct PeriodicityBound;

impl HabitRule for PeriodicityBound {
    fn name(&self) -> &'static str {
        "periodicity_bound"
    }

    fn evaluate(&self, candidate: &HabitCandidate) -> Option<Violation> {
        match candidate.periodicity {
            Some(days) if (MIN_PERIODICITY..=MAX_PERIODICITY).contains(&days) => None,
            _ => Some(Violation::new(
                self.name(),
                "periodicity must be between 1 and 7 days",
            )),
        }
    }
}

/// The full habit rule set, in its fixed evaluation order.
pub struct RuleSet {
    rules: Vec<Box<dyn HabitRule>>,
}

impl RuleSet {
    /// Builds the standard rule set. Order matters: clients receive
    /// violation messages in exactly this order.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Box::new(AwardOrLinkExclusive),
                Box::new(PleasantHabitPurity),
                Box::new(RelatedHabitPleasant),
                Box::new(CompleteTimeCeiling),
                Box::new(PeriodicityBound),
            ],
        }
    }

    /// Evaluates every rule, collecting all violations in rule order.
    pub fn validate(&self, candidate: &HabitCandidate) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(candidate))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
