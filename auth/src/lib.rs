//! Authentication utilities library
//!
//! Provides the credential and token core of the account service:
//! - Password hashing (Argon2id)
//! - Access and refresh JWT issuance and verification, each kind signed
//!   with its own secret
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access and Refresh Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{AuthSecrets, TokenIssuer, TokenKeys, TokenLifetimes, TokenVerifier};
//!
//! let secrets = AuthSecrets::new("access_secret", "refresh_secret").unwrap();
//! let keys = Arc::new(TokenKeys::new(&secrets));
//! let issuer = TokenIssuer::new(Arc::clone(&keys), TokenLifetimes::default());
//! let verifier = TokenVerifier::new(keys);
//!
//! let pair = issuer.issue_pair("a@b.com").unwrap();
//! assert_eq!(verifier.authenticate(&pair.access_token).unwrap(), "a@b.com");
//! assert_eq!(verifier.validate_refresh(&pair.refresh_token).unwrap(), "a@b.com");
//! assert!(verifier.validate_refresh(&pair.access_token).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSecrets, Authenticator, TokenLifetimes};
//!
//! let secrets = AuthSecrets::new("access_secret", "refresh_secret").unwrap();
//! let auth = Authenticator::new(&secrets, TokenLifetimes::default()).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("secret1").unwrap();
//!
//! // Login: verify and issue both tokens
//! let pair = auth.login("secret1", &hash, "a@b.com").unwrap();
//!
//! // Refresh: exchange the refresh token for a new access token
//! let access_token = auth.refresh(&pair.refresh_token).unwrap();
//!
//! // Protected route: validate the access token
//! assert_eq!(auth.authenticate(&access_token).unwrap(), "a@b.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::AuthSecrets;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SecretError;
pub use jwt::TokenIssuer;
pub use jwt::TokenKeys;
pub use jwt::TokenKind;
pub use jwt::TokenLifetimes;
pub use jwt::TokenPair;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
