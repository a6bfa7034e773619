use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::use_cases::accumulate_time::command::AccumulateTime;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shell::http::malformed_body;
use crate::shell::state::AppState;

pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

#[derive(Deserialize)]
pub struct TimerBody {
    pub time: Option<String>,
}

#[derive(Serialize)]
pub struct TimerResponse {
    pub trace_time: ElapsedTime,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    Path(trace_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<TimerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    let idempotency_key = headers
        .get(IDEMPOTENCY_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let command = match AccumulateTime::from_input(
        trace_id,
        body.time.as_deref(),
        idempotency_key,
        Utc::now().timestamp_millis(),
    ) {
        Ok(command) => command,
        Err(errors) => return ApplicationError::Validation(errors).into_response(),
    };

    match state.accumulate_handler.handle(&identity, command).await {
        Ok(trace_time) => (StatusCode::OK, Json(TimerResponse { trace_time })).into_response(),
        Err(e) => e.into_response(),
    }
}
