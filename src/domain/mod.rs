//! Domain layer: entities, validation rules, and policies with no
//! infrastructure dependencies.

pub mod foundation;
pub mod habit;
pub mod user;
