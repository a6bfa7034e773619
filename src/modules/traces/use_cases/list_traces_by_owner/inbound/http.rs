use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::traces::use_cases::list_traces_by_owner::view::TraceView;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, identity: Identity) -> Response {
    match state.list_handler.list(&identity).await {
        Ok(traces) => Json(
            traces
                .into_iter()
                .map(TraceView::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn handle_one(
    State(state): State<AppState>,
    identity: Identity,
    Path(trace_id): Path<String>,
) -> Response {
    match state.list_handler.get(&identity, &trace_id).await {
        Ok(trace) => Json(TraceView::from(trace)).into_response(),
        Err(e) => e.into_response(),
    }
}
