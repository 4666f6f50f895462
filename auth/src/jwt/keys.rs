use std::fmt;

use chrono::Duration;

use super::errors::SecretError;
use super::handler::JwtHandler;

/// The two classes of token the service issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived, presented on every protected request
    Access,
    /// Long-lived, only exchanged for new access tokens
    Refresh,
}

/// Signing secrets, one per token kind.
///
/// Built once at startup and immutable afterwards.
#[derive(Clone)]
pub struct AuthSecrets {
    access: String,
    refresh: String,
}

impl AuthSecrets {
    /// Validate and wrap the access and refresh signing secrets.
    ///
    /// # Errors
    /// * `MissingAccessSecret` - Access secret is empty
    /// * `MissingRefreshSecret` - Refresh secret is empty
    /// * `SharedSecret` - Both kinds would be signed with the same secret
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Result<Self, SecretError> {
        let access = access.into();
        let refresh = refresh.into();

        if access.trim().is_empty() {
            return Err(SecretError::MissingAccessSecret);
        }
        if refresh.trim().is_empty() {
            return Err(SecretError::MissingRefreshSecret);
        }
        if access == refresh {
            return Err(SecretError::SharedSecret);
        }

        Ok(Self { access, refresh })
    }
}

impl fmt::Debug for AuthSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSecrets")
            .field("access", &"[redacted]")
            .field("refresh", &"[redacted]")
            .finish()
    }
}

/// Validity window of each token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    pub fn new(access: Duration, refresh: Duration) -> Self {
        Self { access, refresh }
    }

    pub fn for_kind(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access,
            TokenKind::Refresh => self.refresh,
        }
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::minutes(15),
            refresh: Duration::hours(24),
        }
    }
}

/// Signing keys for both token kinds.
#[derive(Clone)]
pub struct TokenKeys {
    access: JwtHandler,
    refresh: JwtHandler,
}

impl TokenKeys {
    pub fn new(secrets: &AuthSecrets) -> Self {
        Self {
            access: JwtHandler::new(secrets.access.as_bytes()),
            refresh: JwtHandler::new(secrets.refresh.as_bytes()),
        }
    }

    /// Select the key a token of `kind` is signed and verified with.
    pub fn key_for(&self, kind: TokenKind) -> &JwtHandler {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_must_be_present() {
        assert_eq!(
            AuthSecrets::new("", "refresh").unwrap_err(),
            SecretError::MissingAccessSecret
        );
        assert_eq!(
            AuthSecrets::new("access", "   ").unwrap_err(),
            SecretError::MissingRefreshSecret
        );
    }

    #[test]
    fn test_secrets_must_differ() {
        assert_eq!(
            AuthSecrets::new("same-secret", "same-secret").unwrap_err(),
            SecretError::SharedSecret
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let secrets = AuthSecrets::new("access-secret", "refresh-secret").unwrap();
        let debug = format!("{:?}", secrets);

        assert!(!debug.contains("access-secret"));
        assert!(!debug.contains("refresh-secret"));
    }

    #[test]
    fn test_default_lifetimes() {
        let lifetimes = TokenLifetimes::default();

        assert_eq!(lifetimes.for_kind(TokenKind::Access), Duration::minutes(15));
        assert_eq!(lifetimes.for_kind(TokenKind::Refresh), Duration::hours(24));
    }

    #[test]
    fn test_keys_are_separated_by_kind() {
        let secrets = AuthSecrets::new("access-secret", "refresh-secret").unwrap();
        let keys = TokenKeys::new(&secrets);

        let token = keys
            .key_for(TokenKind::Access)
            .encode(&serde_json::json!({ "username": "a@b.com", "exp": 4_102_444_800i64 }))
            .unwrap();

        assert!(keys
            .key_for(TokenKind::Access)
            .decode::<serde_json::Value>(&token)
            .is_ok());
        assert!(keys
            .key_for(TokenKind::Refresh)
            .decode::<serde_json::Value>(&token)
            .is_err());
    }
}
