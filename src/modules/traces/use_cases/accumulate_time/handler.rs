use crate::modules::traces::adapters::outbound::timer_ledger::{Reservation, TimerLedger};
use crate::modules::traces::adapters::outbound::trace_store::TraceStore;
use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::use_cases::accumulate_time::command::AccumulateTime;
use crate::modules::traces::use_cases::accumulate_time::decide::decide_accumulate;
use crate::modules::traces::use_cases::accumulate_time::decision::Decision;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use std::sync::Arc;

pub struct AccumulateTimeHandler<TTraceStore, TLedger>
where
    TTraceStore: TraceStore + 'static,
    TLedger: TimerLedger + 'static,
{
    traces: Arc<TTraceStore>,
    ledger: Arc<TLedger>,
}

impl<TTraceStore, TLedger> AccumulateTimeHandler<TTraceStore, TLedger>
where
    TTraceStore: TraceStore + 'static,
    TLedger: TimerLedger + 'static,
{
    pub fn new(traces: Arc<TTraceStore>, ledger: Arc<TLedger>) -> Self {
        Self { traces, ledger }
    }

    /// Adds the reported time to the caller's trace and returns the new total.
    ///
    /// One read and one version-checked write; a concurrent writer makes this
    /// call fail with `Conflict` instead of losing either update. An
    /// idempotency key is reserved before the write and only released when
    /// nothing was written.
    pub async fn handle(
        &self,
        identity: &Identity,
        command: AccumulateTime,
    ) -> Result<ElapsedTime, ApplicationError> {
        let trace = self.traces.get(&command.trace_id).await?;
        if !trace.is_owned_by(&identity.user_id) {
            return Err(ApplicationError::NotFound(format!(
                "trace {} not found",
                command.trace_id
            )));
        }

        let key = command.idempotency_key.as_deref();
        if let Some(key) = key {
            let reservation = self
                .ledger
                .reserve(&trace.trace_id, key, command.reported)
                .await?;
            if let Reservation::Replay(elapsed) = reservation {
                tracing::info!(trace_id = %trace.trace_id, key, "timer call replayed");
                return Ok(elapsed);
            }
        }

        let saved = match decide_accumulate(&trace, &command) {
            Decision::Accepted { trace } => {
                self.traces.save(trace).await.map_err(ApplicationError::from)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(trace_id = %command.trace_id, %reason, "timer call rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        };
        let saved = match saved {
            Ok(saved) => saved,
            Err(error) => {
                if let Some(key) = key {
                    self.release(&command.trace_id, key).await;
                }
                return Err(error);
            }
        };

        if let Some(key) = key {
            // the time is stored; a lost completion leaves the key reserved
            if let Err(error) = self.ledger.complete(&saved.trace_id, key, saved.elapsed).await {
                tracing::warn!(trace_id = %saved.trace_id, key, %error, "idempotency key not completed");
            }
        }
        tracing::info!(
            trace_id = %saved.trace_id,
            reported = %command.reported,
            trace_time = %saved.elapsed,
            "time added to trace"
        );
        Ok(saved.elapsed)
    }

    async fn release(&self, trace_id: &str, key: &str) {
        if let Err(error) = self.ledger.release(trace_id, key).await {
            tracing::warn!(trace_id, key, %error, "idempotency key not released");
        }
    }
}
