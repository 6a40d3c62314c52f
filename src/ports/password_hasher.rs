//! Password hashing port.
//!
//! Keeps the hashing scheme out of the application layer; the argon2
//! adapter is the production implementation.

use crate::domain::foundation::DomainError;

/// Hashes and verifies passwords.
///
/// Hashing is CPU-bound, not I/O-bound, so the port is synchronous;
/// callers running inside async handlers pay a few milliseconds, which is
/// acceptable at registration/login frequency.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing PHC string.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
