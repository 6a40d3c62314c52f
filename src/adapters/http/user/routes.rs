//! HTTP routes for user endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, UserHandlers};

/// Creates the user router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .with_state(handlers)
}
