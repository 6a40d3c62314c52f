//! Auth adapters: argon2 password hashing and JWT token service.

mod argon2_hasher;
mod jwt;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtTokenService;
