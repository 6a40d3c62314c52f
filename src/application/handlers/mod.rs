//! Application command and query handlers.

pub mod habit;
pub mod user;
