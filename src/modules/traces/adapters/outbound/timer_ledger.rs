use crate::modules::traces::core::elapsed_time::ElapsedTime;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("idempotency key {key} was already used on trace {trace_id} with a different time")]
    KeyReused { trace_id: String, key: String },

    #[error("a timer call with idempotency key {key} on trace {trace_id} is still in flight")]
    InFlight { trace_id: String, key: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Outcome of reserving an idempotency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// The key is now held by the caller, who must `complete` or `release` it.
    Reserved,
    /// The key already finished with this total.
    Replay(ElapsedTime),
}

/// Tracks timer calls that carried an idempotency key.
///
/// A key is reserved before the trace is written, so a key whose write may
/// have landed is never handed out again.
#[async_trait]
pub trait TimerLedger: Send + Sync {
    async fn reserve(
        &self,
        trace_id: &str,
        key: &str,
        reported: ElapsedTime,
    ) -> Result<Reservation, LedgerError>;

    async fn complete(
        &self,
        trace_id: &str,
        key: &str,
        elapsed: ElapsedTime,
    ) -> Result<(), LedgerError>;

    /// Frees a reserved key whose call wrote nothing.
    async fn release(&self, trace_id: &str, key: &str) -> Result<(), LedgerError>;
}
