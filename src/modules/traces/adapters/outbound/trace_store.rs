use crate::modules::traces::core::trace::{NewTrace, Trace};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceStoreError {
    #[error("trace {0} not found")]
    NotFound(String),

    #[error("trace {0} already exists")]
    AlreadyExists(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TraceStore: Send + Sync {
    async fn get(&self, trace_id: &str) -> Result<Trace, TraceStoreError>;

    /// Writes `trace` if the stored version still equals `trace.version`,
    /// and returns it with the version bumped.
    async fn save(&self, trace: Trace) -> Result<Trace, TraceStoreError>;

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Trace>, TraceStoreError>;
    async fn delete(&self, trace_id: &str) -> Result<(), TraceStoreError>;
    async fn create(&self, new_trace: NewTrace) -> Result<Trace, TraceStoreError>;
}
