use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::{User, UserDirectory};
use std::sync::Arc;

pub struct CurrentUserHandler<TUsers>
where
    TUsers: UserDirectory + 'static,
{
    users: Arc<TUsers>,
}

impl<TUsers> CurrentUserHandler<TUsers>
where
    TUsers: UserDirectory + 'static,
{
    pub fn new(users: Arc<TUsers>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, identity: &Identity) -> Result<User, ApplicationError> {
        self.users
            .find_by_id(&identity.user_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("user {} not found", identity.user_id)))
    }
}
