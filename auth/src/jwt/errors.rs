use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    TokenExpired,
}

/// Error for signing secret configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("Access token secret is missing or empty")]
    MissingAccessSecret,

    #[error("Refresh token secret is missing or empty")]
    MissingRefreshSecret,

    #[error("Access and refresh token secrets must differ")]
    SharedSecret,
}
