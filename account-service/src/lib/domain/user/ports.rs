use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegistrationForm;
use crate::domain::user::models::User;

/// Port for account operations exposed to inbound adapters.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user account.
    ///
    /// # Arguments
    /// * `form` - Raw registration input
    ///
    /// # Returns
    /// Created user record
    ///
    /// # Errors
    /// * `Validation` - Input is missing, malformed or too weak
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Directory operation failed
    async fn register(&self, form: RegistrationForm) -> Result<User, UserError>;

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Errors
    /// * `Validation` - Email or password missing, or email malformed
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Signing` - Token signing failed
    /// * `DatabaseError` - Directory operation failed
    async fn login(&self, credentials: Credentials) -> Result<auth::TokenPair, UserError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, wrong token kind or malformed token
    /// * `TokenExpired` - Refresh token is past its expiry
    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError>;

    /// Validate an access token and return the username it carries.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, wrong token kind or malformed token
    /// * `TokenExpired` - Access token is past its expiry
    fn authenticate(&self, access_token: &str) -> Result<String, UserError>;
}

/// Storage of user records, keyed by email.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by email (exact, case-sensitive match).
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
