use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::keys::TokenKeys;
use super::keys::TokenKind;

/// Checks token signature and expiry against the key of the expected kind.
///
/// Validity is decided by signature and clock alone; there is no server-side
/// token state.
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<TokenKeys>,
}

impl TokenVerifier {
    pub fn new(keys: Arc<TokenKeys>) -> Self {
        Self { keys }
    }

    /// Verify a token of `kind` against the current time.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch or malformed structure
    /// * `TokenExpired` - Current time is at or past the `exp` claim
    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(kind, token, Utc::now())
    }

    /// Verify a token of `kind` as if the current time were `now`.
    pub fn verify_at(
        &self,
        kind: TokenKind,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, JwtError> {
        let claims: Claims = self.keys.key_for(kind).decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }

    /// Validate a refresh token and return the username it was issued to.
    pub fn validate_refresh(&self, token: &str) -> Result<String, JwtError> {
        self.verify(TokenKind::Refresh, token)
            .map(|claims| claims.subject)
    }

    /// Validate an access token and return the username it was issued to.
    pub fn authenticate(&self, token: &str) -> Result<String, JwtError> {
        self.verify(TokenKind::Access, token)
            .map(|claims| claims.subject)
    }
}
