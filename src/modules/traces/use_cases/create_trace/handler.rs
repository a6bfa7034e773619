use crate::modules::traces::adapters::outbound::trace_store::TraceStore;
use crate::modules::traces::core::trace::Trace;
use crate::modules::traces::use_cases::create_trace::command::CreateTrace;
use crate::shared::application::errors::ApplicationError;
use std::sync::Arc;

pub struct CreateTraceHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    traces: Arc<TTraceStore>,
}

impl<TTraceStore> CreateTraceHandler<TTraceStore>
where
    TTraceStore: TraceStore + 'static,
{
    pub fn new(traces: Arc<TTraceStore>) -> Self {
        Self { traces }
    }

    pub async fn handle(&self, command: CreateTrace) -> Result<Trace, ApplicationError> {
        let trace = self.traces.create(command.into()).await?;
        tracing::info!(trace_id = %trace.trace_id, owner_id = %trace.owner_id, "trace created");
        Ok(trace)
    }
}
