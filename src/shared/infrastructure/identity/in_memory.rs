use crate::shared::infrastructure::identity::{
    AuthToken, IdentityError, TokenStore, User, UserDirectory,
};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryIdentity {
    users: RwLock<HashMap<String, User>>,
    // keyed by user id: one token per user
    tokens: RwLock<HashMap<String, AuthToken>>,
    is_offline: bool,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user, optionally with a pre-issued token key.
    pub fn with_user(mut self, user: User, token: Option<String>) -> Self {
        if let Some(key) = token {
            self.tokens.get_mut().insert(
                user.user_id.clone(),
                AuthToken {
                    key,
                    user_id: user.user_id.clone(),
                    created_at: Utc::now().timestamp_millis(),
                },
            );
        }
        self.users.get_mut().insert(user.user_id.clone(), user);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), IdentityError> {
        if self.is_offline {
            return Err(IdentityError::Backend("Identity provider offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryIdentity {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, IdentityError> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[async_trait::async_trait]
impl TokenStore for InMemoryIdentity {
    async fn get_or_create(&self, user_id: &str) -> Result<AuthToken, IdentityError> {
        self.ensure_online()?;
        if !self.users.read().await.contains_key(user_id) {
            return Err(IdentityError::UnknownUser(user_id.to_string()));
        }

        let mut tokens = self.tokens.write().await;
        let token = tokens
            .entry(user_id.to_string())
            .or_insert_with(|| AuthToken {
                key: Uuid::new_v4().simple().to_string(),
                user_id: user_id.to_string(),
                created_at: Utc::now().timestamp_millis(),
            });
        Ok(token.clone())
    }

    async fn resolve(&self, key: &str) -> Result<Option<AuthToken>, IdentityError> {
        self.ensure_online()?;
        Ok(self
            .tokens
            .read()
            .await
            .values()
            .find(|token| token.key == key)
            .cloned())
    }
}
