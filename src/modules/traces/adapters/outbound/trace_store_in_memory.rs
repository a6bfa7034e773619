// In memory implementation of the TraceStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Store traces in a map keyed by trace id.
// - Enforce optimistic concurrency on save by checking the version read by the caller.

use crate::modules::traces::adapters::outbound::trace_store::{TraceStore, TraceStoreError};
use crate::modules::traces::core::trace::{NewTrace, Trace};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTraceStore {
    traces: RwLock<HashMap<String, Trace>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryTraceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every save, so racing writers can read the same version first.
    pub fn set_delay_save_ms(&self, delay_ms: u64) {
        self.delay_save_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), TraceStoreError> {
        if self.is_offline {
            return Err(TraceStoreError::Backend("Trace store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TraceStore for InMemoryTraceStore {
    async fn get(&self, trace_id: &str) -> Result<Trace, TraceStoreError> {
        self.ensure_online()?;
        self.traces
            .read()
            .await
            .get(trace_id)
            .cloned()
            .ok_or_else(|| TraceStoreError::NotFound(trace_id.to_string()))
    }

    async fn save(&self, mut trace: Trace) -> Result<Trace, TraceStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.traces.write().await;
        let stored = guard
            .get_mut(&trace.trace_id)
            .ok_or_else(|| TraceStoreError::NotFound(trace.trace_id.clone()))?;
        if stored.version != trace.version {
            return Err(TraceStoreError::VersionMismatch {
                expected: trace.version,
                actual: stored.version,
            });
        }
        trace.version += 1;
        *stored = trace.clone();
        Ok(trace)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Trace>, TraceStoreError> {
        self.ensure_online()?;
        let mut traces: Vec<Trace> = self
            .traces
            .read()
            .await
            .values()
            .filter(|trace| trace.is_owned_by(owner_id))
            .cloned()
            .collect();
        traces.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.trace_id.cmp(&b.trace_id))
        });
        Ok(traces)
    }

    async fn delete(&self, trace_id: &str) -> Result<(), TraceStoreError> {
        self.ensure_online()?;
        self.traces
            .write()
            .await
            .remove(trace_id)
            .map(|_| ())
            .ok_or_else(|| TraceStoreError::NotFound(trace_id.to_string()))
    }

    async fn create(&self, new_trace: NewTrace) -> Result<Trace, TraceStoreError> {
        self.ensure_online()?;
        let mut guard = self.traces.write().await;
        if guard.contains_key(&new_trace.trace_id) {
            return Err(TraceStoreError::AlreadyExists(new_trace.trace_id));
        }
        let trace = Trace::from(new_trace);
        guard.insert(trace.trace_id.clone(), trace.clone());
        Ok(trace)
    }
}
