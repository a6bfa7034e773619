use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::User;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for GqlUser {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Default)]
pub struct CurrentUserQuery;

#[Object]
impl CurrentUserQuery {
    async fn me(&self, context: &Context<'_>) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;
        let user = state
            .current_user_handler
            .handle(identity)
            .await
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }
}
