use async_graphql::{
    EmptySubscription, Error, ErrorExtensions, MergedObject, Schema, Value, http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::accounts::use_cases::current_user::inbound::graphql::CurrentUserQuery;
use crate::modules::traces::use_cases::accumulate_time::inbound::graphql::AccumulateTimeMutation;
use crate::modules::traces::use_cases::create_trace::inbound::graphql::CreateTraceMutation;
use crate::modules::traces::use_cases::delete_trace::inbound::graphql::DeleteTraceMutation;
use crate::modules::traces::use_cases::list_traces_by_owner::inbound::graphql::ListTracesQuery;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListTracesQuery, CurrentUserQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateTraceMutation, AccumulateTimeMutation, DeleteTraceMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Executes a GraphQL request on behalf of the authenticated caller.
pub async fn handle(
    Extension(schema): Extension<AppSchema>,
    identity: Identity,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(identity)).await.into()
}

// Mirrors the HTTP status mapping: a `code` extension, plus `fields` for validation.
impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        match self {
            ApplicationError::Validation(errors) => {
                let fields = serde_json::to_value(errors)
                    .ok()
                    .and_then(|json| Value::from_json(json).ok());
                Error::new("validation failed").extend_with(|_, extensions| {
                    extensions.set("code", "VALIDATION_FAILED");
                    if let Some(fields) = fields {
                        extensions.set("fields", fields);
                    }
                })
            }
            ApplicationError::NotFound(_) => Error::new("not found")
                .extend_with(|_, extensions| extensions.set("code", "NOT_FOUND")),
            ApplicationError::Domain(reason) | ApplicationError::Conflict(reason) => {
                Error::new(reason.as_str())
                    .extend_with(|_, extensions| extensions.set("code", "CONFLICT"))
            }
            other => {
                tracing::error!(error = %other, "graphql request failed");
                Error::new("internal server error")
                    .extend_with(|_, extensions| extensions.set("code", "INTERNAL"))
            }
        }
    }
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
