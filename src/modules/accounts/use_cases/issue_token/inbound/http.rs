use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct IssueTokenResponse {
    #[serde(rename = "api-token")]
    pub api_token: String,
}

pub async fn handle(State(state): State<AppState>, identity: Identity) -> Response {
    match state.issue_token_handler.handle(&identity).await {
        Ok(token) => Json(IssueTokenResponse { api_token: token.key }).into_response(),
        Err(e) => e.into_response(),
    }
}
