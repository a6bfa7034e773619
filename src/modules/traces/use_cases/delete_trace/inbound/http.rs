use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    Path(trace_id): Path<String>,
) -> Response {
    match state.delete_handler.handle(&identity, &trace_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}
