use crate::modules::traces::adapters::outbound::trace_store::TraceStore;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use std::sync::Arc;

pub struct DeleteTraceHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    traces: Arc<TTraceStore>,
}

impl<TTraceStore> DeleteTraceHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    pub fn new(traces: Arc<TTraceStore>) -> Self {
        Self { traces }
    }

    /// Deletes the trace when the caller owns it.
    pub async fn handle(&self, identity: &Identity, trace_id: &str) -> Result<(), ApplicationError> {
        let trace = self.traces.get(trace_id).await?;
        if !trace.is_owned_by(&identity.user_id) {
            tracing::warn!(trace_id, user_id = %identity.user_id, "refused to delete a foreign trace");
            return Err(ApplicationError::NotFound(format!(
                "trace {trace_id} not found"
            )));
        }
        self.traces.delete(trace_id).await?;
        tracing::info!(trace_id, "trace deleted");
        Ok(())
    }
}
