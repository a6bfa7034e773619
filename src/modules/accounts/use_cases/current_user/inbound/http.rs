use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::User;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserProfile {
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

pub async fn handle(State(state): State<AppState>, identity: Identity) -> Response {
    match state.current_user_handler.handle(&identity).await {
        Ok(user) => Json(UserProfile::from(user)).into_response(),
        Err(e) => e.into_response(),
    }
}
