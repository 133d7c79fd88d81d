use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Email uniqueness is checked under the write lock, so concurrent creates for the
/// same address resolve to exactly one record. Ids come from a counter that only
/// moves forward and are never handed out twice.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl State {
    fn email_taken_by_other(&self, email: &EmailAddress, owner: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| &u.email == email && Some(u.id) != owner)
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        if state.email_taken_by_other(&user.email, None) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        state.last_id += 1;
        let user = user.with_id(UserId(state.last_id));
        state.users.insert(user.id.0, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, UserError> {
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if state.email_taken_by_other(&user.email, Some(user.id)) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        state.users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<User, UserError> {
        self.state
            .write()
            .await
            .users
            .remove(&id.0)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}
