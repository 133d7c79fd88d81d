use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn ensure_email_available(
        &self,
        email: &EmailAddress,
        owner: Option<UserId>,
    ) -> Result<(), UserError> {
        match self.repository.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(UserError::EmailAlreadyExists(email.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Hash on the blocking pool; Argon2 would otherwise stall a runtime worker.
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| auth::PasswordError::HashingFailed(e.to_string()))?
            .map_err(UserError::from)
    }

    async fn verify_password(
        &self,
        password: &str,
        stored_hash: Option<String>,
    ) -> Result<bool, UserError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || {
            hasher.verify_or_decoy(&password, stored_hash.as_deref())
        })
        .await
        .map_err(|e| UserError::from(auth::PasswordError::HashingFailed(e.to_string())))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Fast path; the storage constraint still decides concurrent races.
        self.ensure_email_available(&command.email, None).await?;

        let password_hash = self
            .hash_password(command.password.as_str().to_string())
            .await?;

        let new_user = NewUser {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            avatar_url: command.avatar_url,
            password_hash,
        };

        let created_user = self.repository.create(new_user).await?;

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>, UserError> {
        self.repository.list(offset.max(0), limit.max(0)).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_first_name) = command.first_name {
            user.first_name = new_first_name;
        }

        if let Some(new_last_name) = command.last_name {
            user.last_name = new_last_name;
        }

        if let Some(new_email) = command.email {
            if new_email != user.email {
                self.ensure_email_available(&new_email, Some(user.id))
                    .await?;
            }
            user.email = new_email;
        }

        if let Some(new_avatar_url) = command.avatar_url {
            user.avatar_url = Some(new_avatar_url);
        }

        if let Some(new_password) = command.password {
            user.password_hash = self
                .hash_password(new_password.as_str().to_string())
                .await?;
        }

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<User, UserError> {
        let removed = self.repository.delete(id).await?;

        tracing::info!(user_id = %removed.id, "User deleted");

        Ok(removed)
    }

    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        let user = self.repository.find_by_email(email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        if self.verify_password(password, stored_hash).await? {
            Ok(user)
        } else {
            tracing::debug!("Authentication rejected");
            Ok(None)
        }
    }
}
