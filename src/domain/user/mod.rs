//! User domain: account entity and errors.

pub mod entity;
pub mod errors;

pub use entity::User;
pub use errors::UserError;
