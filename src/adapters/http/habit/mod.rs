//! HTTP adapter for habit endpoints.
//!
//! - `GET /` - list published habits, paginated
//! - `GET /habit/list_person/` - list the requester's habits
//! - `GET /habit/retrieve/:id/` - fetch one habit
//! - `POST /habit/create/` - create a habit (owner forced to requester)
//! - `PATCH|PUT /habit/update/:id/` - update a habit (owner only)
//! - `DELETE /habit/delete/:id/` - delete a habit (owner only)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::HabitHandlers;
pub use routes::habit_routes;
