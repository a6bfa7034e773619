use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::traces::core::trace::Trace;
use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTrace {
    pub id: ID,
    pub user: String,
    pub name: String,
    pub description: String,
    pub trace_time: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Trace> for GqlTrace {
    fn from(trace: Trace) -> Self {
        Self {
            id: ID(trace.trace_id),
            user: trace.owner_id,
            name: trace.name,
            description: trace.description,
            trace_time: trace.elapsed.to_string(),
            created_at: trace.created_at,
            updated_at: trace.updated_at,
        }
    }
}

#[derive(Default)]
pub struct ListTracesQuery;

#[Object]
impl ListTracesQuery {
    async fn traces(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTrace>> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;
        let list = state
            .list_handler
            .list(identity)
            .await
            .map_err(|e| e.extend())?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn trace(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlTrace> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;
        let trace = state
            .list_handler
            .get(identity, &id)
            .await
            .map_err(|e| e.extend())?;
        Ok(trace.into())
    }
}
