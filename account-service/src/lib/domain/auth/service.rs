use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenService;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Orchestrates signup, login and bearer resolution on top of the user service and
/// the token service.
pub struct AuthService<US>
where
    US: UserServicePort,
{
    users: Arc<US>,
    tokens: Arc<TokenService>,
}

impl<US> AuthService<US>
where
    US: UserServicePort,
{
    pub fn new(users: Arc<US>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserServicePort,
{
    async fn signup(&self, command: CreateUserCommand) -> Result<User, AuthError> {
        let user = self.users.create_user(command).await?;
        tracing::info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<AccessToken, AuthError> {
        let user = self
            .users
            .authenticate(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.tokens.issue(user.email.as_str())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AccessToken::bearer(token))
    }

    async fn resolve_bearer(&self, token: &str) -> Result<User, AuthError> {
        let subject = self.tokens.verify(token).ok_or(AuthError::InvalidToken)?;

        let email = EmailAddress::new(subject).map_err(|_| AuthError::InvalidToken)?;

        match self.users.get_user_by_email(&email).await {
            Ok(user) => Ok(user),
            Err(UserError::NotFoundByEmail(_)) => {
                tracing::debug!("Token subject no longer exists");
                Err(AuthError::InvalidToken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
