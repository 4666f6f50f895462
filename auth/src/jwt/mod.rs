pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod keys;
pub mod verifier;

pub use claims::Claims;
pub use errors::JwtError;
pub use errors::SecretError;
pub use handler::JwtHandler;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use keys::AuthSecrets;
pub use keys::TokenKeys;
pub use keys::TokenKind;
pub use keys::TokenLifetimes;
pub use verifier::TokenVerifier;
