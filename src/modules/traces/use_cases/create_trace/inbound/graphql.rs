use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::traces::use_cases::create_trace::command::{CreateTrace, CreateTraceInput};
use crate::modules::traces::use_cases::list_traces_by_owner::inbound::graphql::GqlTrace;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateTraceMutation;

#[Object]
impl CreateTraceMutation {
    async fn create_trace(
        &self,
        context: &Context<'_>,
        name: String,
        description: Option<String>,
        trace_time: Option<String>,
    ) -> GqlResult<GqlTrace> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;

        let command = CreateTrace::from_input(
            Uuid::now_v7().to_string(),
            identity.user_id.clone(),
            CreateTraceInput {
                name: Some(name),
                description,
                trace_time,
            },
            Utc::now().timestamp_millis(),
        )
        .map_err(|e| ApplicationError::Validation(e).extend())?;

        let trace = state
            .create_handler
            .handle(command)
            .await
            .map_err(|e| e.extend())?;
        Ok(trace.into())
    }
}
