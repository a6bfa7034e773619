use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::shared::core::identity::Identity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTraceMutation;

#[Object]
impl DeleteTraceMutation {
    async fn delete_trace(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let identity = context.data::<Identity>()?;
        state
            .delete_handler
            .handle(identity, &id)
            .await
            .map_err(|e| e.extend())?;
        Ok(id)
    }
}
