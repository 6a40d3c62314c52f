//! Ports: async trait contracts between the application core and its
//! adapters (persistence, auth, messaging).

mod habit_repository;
mod message_sender;
mod password_hasher;
mod token_service;
mod user_repository;

pub use habit_repository::HabitRepository;
pub use message_sender::MessageSender;
pub use password_hasher::PasswordHasher;
pub use token_service::TokenService;
pub use user_repository::UserRepository;
