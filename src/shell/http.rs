use axum::{
    Extension, Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::accounts::use_cases::current_user::inbound::http as current_user_http;
use crate::modules::accounts::use_cases::issue_token::inbound::http as issue_token_http;
use crate::modules::traces::use_cases::accumulate_time::inbound::http as accumulate_http;
use crate::modules::traces::use_cases::create_trace::inbound::http as create_http;
use crate::modules::traces::use_cases::delete_trace::inbound::http as delete_http;
use crate::modules::traces::use_cases::list_traces_by_owner::inbound::http as list_http;
use crate::shared::application::errors::ApplicationError;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    Router::new()
        .route("/traces", get(list_http::handle).post(create_http::handle))
        .route(
            "/traces/{id}",
            get(list_http::handle_one).delete(delete_http::handle),
        )
        .route("/timer/{id}", post(accumulate_http::handle))
        .route("/me", get(current_user_http::handle))
        .route("/token", post(issue_token_http::handle))
        .route("/graphql", get(graphql::graphiql).post(graphql::handle))
        .route("/health", get(health))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// 400 for a request body that is not the expected JSON.
pub fn malformed_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": rejection.body_text() })),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApplicationError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "not found" })),
            )
                .into_response(),
            ApplicationError::Domain(reason) | ApplicationError::Conflict(reason) => {
                (StatusCode::CONFLICT, Json(json!({ "detail": reason }))).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
