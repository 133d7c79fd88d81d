use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;

/// Port for the account authentication flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Errors
    /// * `User(EmailAlreadyExists)` - Email is already registered
    /// * `User(_)` - Storage or hashing failure
    async fn signup(&self, command: CreateUserCommand) -> Result<User, AuthError>;

    /// Exchange an email/password pair for a bearer token whose subject is the email.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Token` - Token generation failed
    async fn login(&self, email: &EmailAddress, password: &str)
        -> Result<AccessToken, AuthError>;

    /// Resolve the account behind a bearer token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is invalid, expired, or its user no longer exists
    async fn resolve_bearer(&self, token: &str) -> Result<User, AuthError>;
}
