use std::sync::Arc;

use crate::jwt::AuthSecrets;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenKeys;
use crate::jwt::TokenLifetimes;
use crate::jwt::TokenPair;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and the
/// access/refresh token lifecycle.
///
/// Holds no mutable state; share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    decoy_hash: String,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

// Checked against when no account matches, so that path costs one Argon2 run.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secrets` - Access and refresh signing secrets
    /// * `lifetimes` - Validity window of each token kind
    ///
    /// # Returns
    /// Configured Authenticator instance
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn new(secrets: &AuthSecrets, lifetimes: TokenLifetimes) -> Result<Self, PasswordError> {
        let keys = Arc::new(TokenKeys::new(secrets));
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            decoy_hash,
            issuer: TokenIssuer::new(Arc::clone(&keys), lifetimes),
            verifier: TokenVerifier::new(keys),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `username` - Username embedded in both tokens
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `JwtError` - Token signing failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        username: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issuer.issue_pair(username)?)
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs the same password verification as `login` against a decoy hash,
    /// so the response time does not reveal whether the account exists.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.decoy_hash);
        AuthenticationError::InvalidCredentials
    }

    /// Exchange a valid refresh token for a new access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token signature or structure is invalid
    /// * `TokenExpired` - Refresh token is past its expiry
    /// * `EncodingFailed` - Access token signing failed
    pub fn refresh(&self, refresh_token: &str) -> Result<String, JwtError> {
        let username = self.verifier.validate_refresh(refresh_token)?;
        self.issuer.issue_access(&username)
    }

    /// Validate an access token and return its username.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or structure is invalid
    /// * `TokenExpired` - Access token is past its expiry
    pub fn authenticate(&self, access_token: &str) -> Result<String, JwtError> {
        self.verifier.authenticate(access_token)
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
