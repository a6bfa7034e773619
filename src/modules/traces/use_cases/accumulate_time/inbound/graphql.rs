use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::traces::use_cases::accumulate_time::command::AccumulateTime;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AccumulateTimeMutation;

#[Object]
impl AccumulateTimeMutation {
    /// Adds `time` (`HH:MM:SS`) to the trace and returns its new elapsed time.
    async fn add_time(
        &self,
        context: &Context<'_>,
        trace_id: String,
        time: String,
        idempotency_key: Option<String>,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;

        let command = AccumulateTime::from_input(
            trace_id,
            Some(&time),
            idempotency_key,
            Utc::now().timestamp_millis(),
        )
        .map_err(|e| ApplicationError::Validation(e).extend())?;

        let elapsed = state
            .accumulate_handler
            .handle(identity, command)
            .await
            .map_err(|e| e.extend())?;
        Ok(elapsed.to_string())
    }
}
