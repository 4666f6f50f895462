use thiserror::Error;

/// Error for malformed or missing registration and login input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required, missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize, actual: usize },

    #[error("{field} must be at most {max} characters long, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // Authentication errors. The credentials message is shared by the
    // unknown-email and wrong-password cases.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::JwtError> for UserError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::InvalidToken(reason) => UserError::InvalidToken(reason),
            auth::JwtError::TokenExpired => UserError::TokenExpired,
            auth::JwtError::EncodingFailed(reason) => UserError::Signing(reason),
        }
    }
}

impl From<auth::AuthenticationError> for UserError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => UserError::Password(e),
            auth::AuthenticationError::JwtError(e) => e.into(),
        }
    }
}
