//! PostgreSQL adapters for the repository ports.

mod habit_repository;
mod user_repository;

pub use habit_repository::PostgresHabitRepository;
pub use user_repository::PostgresUserRepository;
