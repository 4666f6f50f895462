use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by access and refresh tokens.
///
/// Both token kinds share this shape; they differ only by signing key and
/// lifetime. The subject is the account's username (its email address).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username the token was issued to
    #[serde(rename = "username")]
    pub subject: String,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
}

impl Claims {
    /// Create claims for `subject` valid for `lifetime` starting at `now`.
    ///
    /// # Arguments
    /// * `subject` - Username to embed
    /// * `now` - Issue instant
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// Claims with subject, expiration and issued-at set
    pub fn new(subject: impl ToString, now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            subject: subject.to_string(),
            expires_at: (now + lifetime).timestamp(),
            issued_at: Some(now.timestamp()),
        }
    }

    /// Check if the token is expired.
    ///
    /// A token is expired from the second of its `exp` claim onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.expires_at
    }
}
