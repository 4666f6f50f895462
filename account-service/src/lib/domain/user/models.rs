use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::ValidationError;

/// User record as stored in the directory.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a freshly registered user.
    ///
    /// The account is active, not a superuser and not yet verified.
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            first_name,
            last_name,
            email,
            password_hash,
            is_active: true,
            is_superuser: false,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name of a user.
///
/// Non-blank, surrounding whitespace removed, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub const MAX_LENGTH: usize = 50;

    /// Create a new valid name.
    ///
    /// # Arguments
    /// * `field` - Field name reported in errors (e.g. `firstName`)
    /// * `name` - Raw name
    ///
    /// # Errors
    /// * `MissingFields` - Name is blank
    /// * `TooLong` - Name is longer than 50 characters
    pub fn new(field: &'static str, name: String) -> Result<Self, ValidationError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(ValidationError::MissingFields(vec![field]))
        } else if length > Self::MAX_LENGTH {
            Err(ValidationError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// A plain `local@domain` address: no display name, no whitespace, and a
/// dotted domain. Case is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MAX_LENGTH: usize = 100;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidEmailFormat` - Email is not a plain `local@domain` address
    pub fn new(email: String) -> Result<Self, ValidationError> {
        let email = email.trim();

        let plain = !email
            .chars()
            .any(|c| c.is_whitespace() || c == '<' || c == '>');
        let dotted_domain = email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'));

        if plain && dotted_domain && email_address::EmailAddress::from_str(email).is_ok() {
            Ok(Self(email.to_string()))
        } else {
            Err(ValidationError::InvalidEmailFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password in transit; never stored.
///
/// Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 6;

    /// Accept a password for a new account.
    ///
    /// # Errors
    /// * `WeakPassword` - Shorter than 6 characters
    pub fn new(password: String) -> Result<Self, ValidationError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(ValidationError::WeakPassword {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    /// Apply the strength rule to a presented password.
    pub fn checked(self) -> Result<Self, ValidationError> {
        Self::new(self.0)
    }

    /// Wrap a password presented at login; strength is not re-checked.
    pub fn presented(password: String) -> Self {
        Self(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

/// Raw registration input, before validation.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Password,
}

/// Raw login input, before validation. Never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

/// Validated registration data.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

/// Validated login data.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}
