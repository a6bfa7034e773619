use crate::modules::traces::adapters::outbound::trace_store::TraceStore;
use crate::modules::traces::core::trace::Trace;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use std::sync::Arc;

pub struct ListTracesHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    traces: Arc<TTraceStore>,
}

impl<TTraceStore> ListTracesHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    pub fn new(traces: Arc<TTraceStore>) -> Self {
        Self { traces }
    }

    pub async fn list(&self, identity: &Identity) -> Result<Vec<Trace>, ApplicationError> {
        Ok(self.traces.list_by_owner(&identity.user_id).await?)
    }

    /// The trace if the caller owns it; someone else's trace is reported as missing.
    pub async fn get(&self, identity: &Identity, trace_id: &str) -> Result<Trace, ApplicationError> {
        let trace = self.traces.get(trace_id).await?;
        if !trace.is_owned_by(&identity.user_id) {
            return Err(ApplicationError::NotFound(format!(
                "trace {trace_id} not found"
            )));
        }
        Ok(trace)
    }
}
