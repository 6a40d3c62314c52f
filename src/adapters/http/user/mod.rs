//! HTTP adapter for user endpoints.
//!
//! - `POST /users/register` - create an account (email + password)
//! - `POST /users/login` - verify credentials, issue a bearer token

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UserHandlers;
pub use routes::user_routes;
