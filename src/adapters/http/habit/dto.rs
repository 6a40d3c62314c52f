//! HTTP DTOs for habit endpoints.
//!
//! These types decouple the HTTP API from domain types. List responses
//! use the `{count, next, previous, results}` envelope.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{HabitId, PageSlice, Violation};
use crate::domain::habit::Habit;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a habit. There is deliberately no `owner` field:
/// ownership always comes from the authenticated requester.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabitRequest {
    #[serde(default)]
    pub place: Option<String>,
    pub time: NaiveTime,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub action: String,
    #[serde(default)]
    pub is_pleasant: bool,
    #[serde(default)]
    pub related_habit: Option<HabitId>,
    #[serde(default)]
    pub periodicity: Option<u32>,
    #[serde(default)]
    pub award: Option<String>,
    #[serde(default)]
    pub complete_time_secs: Option<u32>,
    #[serde(default)]
    pub is_published: bool,
}

/// Distinguishes an omitted field from an explicit `null`: omitted keeps
/// the stored value, `null` clears it.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update request; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHabitRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub place: Option<Option<String>>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub is_pleasant: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub related_habit: Option<Option<HabitId>>,
    #[serde(default)]
    pub periodicity: Option<u32>,
    #[serde(default, deserialize_with = "double_option")]
    pub award: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub complete_time_secs: Option<Option<u32>>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full habit view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct HabitResponse {
    pub id: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub action: String,
    pub is_pleasant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_habit: Option<String>,
    pub periodicity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_time_secs: Option<u32>,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Habit> for HabitResponse {
    fn from(habit: Habit) -> Self {
        Self {
            id: habit.id().to_string(),
            owner: habit.owner().to_string(),
            place: habit.place().map(str::to_string),
            time: habit.time(),
            date: habit.date(),
            action: habit.action().to_string(),
            is_pleasant: habit.is_pleasant(),
            related_habit: habit.related_habit().map(|id| id.to_string()),
            periodicity: habit.periodicity(),
            award: habit.award().map(str::to_string),
            complete_time_secs: habit.complete_time_secs(),
            is_published: habit.is_published(),
            created_at: habit.created_at().to_rfc3339(),
            updated_at: habit.updated_at().to_rfc3339(),
        }
    }
}

/// DRF-style pagination envelope.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Wraps a repository slice, building page links off `base_path`.
    pub fn from_slice<U>(slice: PageSlice<U>, base_path: &str) -> Self
    where
        U: Into<T>,
    {
        let page = slice.page.number();
        let next = slice
            .has_next()
            .then(|| format!("{}?page={}", base_path, page + 1));
        let previous = slice
            .has_previous()
            .then(|| format!("{}?page={}", base_path, page - 1));
        Self {
            count: slice.total,
            next,
            previous,
            results: slice.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Validation failure carrying the full ordered message list.
    pub fn validation(violations: &[Violation]) -> Self {
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: messages.join("; "),
            details: Some(serde_json::json!(messages)),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn forbidden() -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: "forbidden".to_string(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Page, UserId};
    use crate::domain::habit::HabitCandidate;

    #[test]
    fn create_request_applies_defaults() {
        let json = r#"{"time": "21:00:00", "action": "walk", "periodicity": 1}"#;
        let req: CreateHabitRequest = serde_json::from_str(json).unwrap();
        assert!(!req.is_pleasant);
        assert!(!req.is_published);
        assert!(req.date.is_none());
        assert_eq!(req.periodicity, Some(1));
    }

    #[test]
    fn update_request_distinguishes_missing_from_null() {
        let req: UpdateHabitRequest = serde_json::from_str(r#"{"award": null}"#).unwrap();
        assert_eq!(req.award, Some(None));
        assert_eq!(req.place, None);

        let req: UpdateHabitRequest =
            serde_json::from_str(r#"{"award": "cake", "place": null}"#).unwrap();
        assert_eq!(req.award, Some(Some("cake".to_string())));
        assert_eq!(req.place, Some(None));
    }

    #[test]
    fn habit_response_conversion() {
        let candidate = HabitCandidate {
            place: Some("park".to_string()),
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            action: "run".to_string(),
            is_pleasant: false,
            related_habit: None,
            periodicity: Some(2),
            award: None,
            complete_time_secs: Some(120),
            is_published: true,
        };
        let habit = Habit::new(HabitId::new(), UserId::new(), &candidate).unwrap();

        let response: HabitResponse = habit.clone().into();
        assert_eq!(response.id, habit.id().to_string());
        assert_eq!(response.action, "run");
        assert_eq!(response.periodicity, 2);
        assert!(response.is_published);
    }

    #[test]
    fn envelope_links_reflect_position() {
        let slice: PageSlice<u32> = PageSlice::new(vec![6, 7, 8, 9, 10], 12, Page::new(2));
        let envelope: PaginatedResponse<u32> = PaginatedResponse::from_slice(slice, "/");
        assert_eq!(envelope.count, 12);
        assert_eq!(envelope.next.as_deref(), Some("/?page=3"));
        assert_eq!(envelope.previous.as_deref(), Some("/?page=1"));
    }

    #[test]
    fn empty_envelope_has_no_links() {
        let slice: PageSlice<u32> = PageSlice::new(vec![], 0, Page::first());
        let envelope: PaginatedResponse<u32> = PaginatedResponse::from_slice(slice, "/");
        assert_eq!(envelope.count, 0);
        assert!(envelope.next.is_none());
        assert!(envelope.previous.is_none());
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn validation_error_keeps_message_order() {
        let violations = vec![
            Violation::new("a", "first message"),
            Violation::new("b", "second message"),
        ];
        let error = ErrorResponse::validation(&violations);
        assert_eq!(error.code, "VALIDATION_FAILED");
        assert_eq!(
            error.details,
            Some(serde_json::json!(["first message", "second message"]))
        );
    }
}
