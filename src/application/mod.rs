//! Application layer: command/query handlers and background jobs.

pub mod handlers;
pub mod reminder;
