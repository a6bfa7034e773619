// Identity ports: who the users are and which opaque token belongs to whom.
//
// The HTTP shell authenticates against these; use cases only ever see the
// resulting `Identity`.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod in_memory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub key: String,
    pub user_id: String,
    pub created_at: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("user {0} not found")]
    UnknownUser(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, IdentityError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError>;
}

#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the user's token, creating it on first request.
    async fn get_or_create(&self, user_id: &str) -> Result<AuthToken, IdentityError>;
    async fn resolve(&self, key: &str) -> Result<Option<AuthToken>, IdentityError>;
}
