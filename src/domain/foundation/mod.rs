//! Shared domain foundation: identifiers, errors, auth claims, pagination.

mod auth;
mod errors;
mod ids;
mod pagination;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, Violation};
pub use ids::{HabitId, UserId};
pub use pagination::{Page, PageSlice, PAGE_SIZE};
