use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::keys::TokenKeys;
use super::keys::TokenKind;
use super::keys::TokenLifetimes;

/// Access and refresh tokens issued together at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Creates signed, time-bounded tokens carrying a username claim.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<TokenKeys>,
    lifetimes: TokenLifetimes,
}

impl TokenIssuer {
    pub fn new(keys: Arc<TokenKeys>, lifetimes: TokenLifetimes) -> Self {
        Self { keys, lifetimes }
    }

    /// Issue a token of `kind` for `username`, valid from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, kind: TokenKind, username: &str) -> Result<String, JwtError> {
        self.issue_at(kind, username, Utc::now())
    }

    /// Issue a token of `kind` for `username` as if the current time were `now`.
    ///
    /// The token expires `now` plus the lifetime configured for `kind`, and is
    /// signed with the key selected for `kind`.
    pub fn issue_at(
        &self,
        kind: TokenKind,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(username, now, self.lifetimes.for_kind(kind));
        self.keys.key_for(kind).encode(&claims)
    }

    pub fn issue_access(&self, username: &str) -> Result<String, JwtError> {
        self.issue(TokenKind::Access, username)
    }

    pub fn issue_refresh(&self, username: &str) -> Result<String, JwtError> {
        self.issue(TokenKind::Refresh, username)
    }

    /// Issue both tokens for `username` from the same instant.
    pub fn issue_pair(&self, username: &str) -> Result<TokenPair, JwtError> {
        self.issue_pair_at(username, Utc::now())
    }

    pub fn issue_pair_at(&self, username: &str, now: DateTime<Utc>) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue_at(TokenKind::Access, username, now)?,
            refresh_token: self.issue_at(TokenKind::Refresh, username, now)?,
        })
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }
}
