//! Habit-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, HabitId, Violation};

/// Errors raised by habit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitError {
    /// Habit was not found.
    NotFound(HabitId),
    /// The linked related habit does not exist.
    RelatedHabitNotFound(HabitId),
    /// Actor is not the owner of a protected habit.
    Forbidden,
    /// One or more rules rejected the candidate; the list keeps rule order.
    Validation(Vec<Violation>),
    /// A per-field invariant failed (length, emptiness).
    FieldInvalid(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl HabitError {
    pub fn not_found(id: HabitId) -> Self {
        HabitError::NotFound(id)
    }

    pub fn related_not_found(id: HabitId) -> Self {
        HabitError::RelatedHabitNotFound(id)
    }

    pub fn forbidden() -> Self {
        HabitError::Forbidden
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        HabitError::Validation(violations)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        HabitError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            HabitError::NotFound(_) => ErrorCode::HabitNotFound,
            HabitError::RelatedHabitNotFound(_) => ErrorCode::HabitNotFound,
            HabitError::Forbidden => ErrorCode::Forbidden,
            HabitError::Validation(_) => ErrorCode::ValidationFailed,
            HabitError::FieldInvalid(_) => ErrorCode::ValidationFailed,
            HabitError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            HabitError::NotFound(id) => format!("Habit not found: {}", id),
            HabitError::RelatedHabitNotFound(id) => format!("Related habit not found: {}", id),
            HabitError::Forbidden => "forbidden".to_string(),
            HabitError::Validation(violations) => violations
                .iter()
                .map(|v| v.message.clone())
                .collect::<Vec<_>>()
                .join("; "),
            HabitError::FieldInvalid(msg) => msg.clone(),
            HabitError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for HabitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for HabitError {}

impl From<DomainError> for HabitError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => HabitError::Forbidden,
            ErrorCode::EmptyField | ErrorCode::FieldTooLong | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat | ErrorCode::ValidationFailed => {
                HabitError::FieldInvalid(err.message)
            }
            _ => HabitError::Infrastructure(err.message),
        }
    }
}
