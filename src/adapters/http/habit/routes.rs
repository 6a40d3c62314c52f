//! HTTP routes for habit endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_habit, delete_habit, list_person, list_published, retrieve_habit, update_habit,
    HabitHandlers,
};

/// Creates the habit router with all endpoints.
pub fn habit_routes(handlers: HabitHandlers) -> Router {
    Router::new()
        .route("/", get(list_published))
        .route("/habit/list_person/", get(list_person))
        .route("/habit/retrieve/:id/", get(retrieve_habit))
        .route("/habit/create/", post(create_habit))
        .route("/habit/update/:id/", patch(update_habit).put(update_habit))
        .route("/habit/delete/:id/", delete(delete_habit))
        .with_state(handlers)
}
