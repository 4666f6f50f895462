use thiserror::Error;

/// Internal failures of the password hasher.
///
/// A wrong password is not an error: `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Salt generation or hash computation failed.
    #[error("Unable to hash password: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed.
    #[error("Unable to verify password: {0}")]
    VerificationFailed(String),
}
