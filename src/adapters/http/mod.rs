//! HTTP adapters - REST API implementations.

pub mod habit;
pub mod middleware;
pub mod user;

pub use habit::{habit_routes, HabitHandlers};
pub use user::{user_routes, UserHandlers};
