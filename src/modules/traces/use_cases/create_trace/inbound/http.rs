use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::traces::use_cases::create_trace::command::{CreateTrace, CreateTraceInput};
use crate::modules::traces::use_cases::list_traces_by_owner::view::TraceView;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shell::http::malformed_body;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<CreateTraceInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    let command = match CreateTrace::from_input(
        Uuid::now_v7().to_string(),
        identity.user_id,
        input,
        Utc::now().timestamp_millis(),
    ) {
        Ok(command) => command,
        Err(errors) => return ApplicationError::Validation(errors).into_response(),
    };

    match state.create_handler.handle(command).await {
        Ok(trace) => (StatusCode::CREATED, Json(TraceView::from(trace))).into_response(),
        Err(e) => e.into_response(),
    }
}
