use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenPair;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegistrationForm;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserDirectory;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::validation::validate_login;
use crate::domain::user::validation::validate_registration;

/// Domain service implementation for account operations.
///
/// Concrete implementation of UserServicePort over any user directory.
pub struct UserService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
    authenticator: Arc<Authenticator>,
}

impl<UD> UserService<UD>
where
    UD: UserDirectory,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User storage implementation
    /// * `authenticator` - Password hashing and token lifecycle
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(directory: Arc<UD>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

#[async_trait]
impl<UD> UserServicePort for UserService<UD>
where
    UD: UserDirectory,
{
    async fn register(&self, form: RegistrationForm) -> Result<User, UserError> {
        let command = validate_registration(form)?;

        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())?;

        let user = User::new(
            command.first_name,
            command.last_name,
            command.email,
            password_hash,
        );

        let created_user = self.directory.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            email = %created_user.email,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, credentials: Credentials) -> Result<TokenPair, UserError> {
        let command = validate_login(credentials)?;

        let Some(user) = self.directory.find_by_email(&command.email).await? else {
            tracing::warn!(email = %command.email, "Login rejected: unknown email");
            return Err(self
                .authenticator
                .reject_unknown(command.password.as_str())
                .into());
        };

        match self.authenticator.login(
            command.password.as_str(),
            &user.password_hash,
            user.email.as_str(),
        ) {
            Ok(pair) => {
                tracing::info!(user_id = %user.id, email = %user.email, "User logged in");
                Ok(pair)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError> {
        Ok(self.authenticator.refresh(refresh_token)?)
    }

    fn authenticate(&self, access_token: &str) -> Result<String, UserError> {
        Ok(self.authenticator.authenticate(access_token)?)
    }
}
