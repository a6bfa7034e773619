use crate::modules::traces::adapters::outbound::timer_ledger::{
    LedgerError, Reservation, TimerLedger,
};
use crate::modules::traces::core::elapsed_time::ElapsedTime;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy)]
struct LedgerEntry {
    reported: ElapsedTime,
    // None while the call is in flight
    outcome: Option<ElapsedTime>,
}

#[derive(Default)]
pub struct InMemoryTimerLedger {
    entries: Mutex<HashMap<(String, String), LedgerEntry>>,
    is_offline: bool,
}

impl InMemoryTimerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Timer ledger offline".into()));
        }
        Ok(())
    }
}

fn entry_key(trace_id: &str, key: &str) -> (String, String) {
    (trace_id.to_string(), key.to_string())
}

#[async_trait::async_trait]
impl TimerLedger for InMemoryTimerLedger {
    async fn reserve(
        &self,
        trace_id: &str,
        key: &str,
        reported: ElapsedTime,
    ) -> Result<Reservation, LedgerError> {
        self.ensure_online()?;
        let mut entries = self.entries.lock().await;
        match entries.get(&entry_key(trace_id, key)) {
            Some(entry) if entry.reported != reported => Err(LedgerError::KeyReused {
                trace_id: trace_id.to_string(),
                key: key.to_string(),
            }),
            Some(LedgerEntry {
                outcome: Some(elapsed),
                ..
            }) => Ok(Reservation::Replay(*elapsed)),
            Some(_) => Err(LedgerError::InFlight {
                trace_id: trace_id.to_string(),
                key: key.to_string(),
            }),
            None => {
                entries.insert(
                    entry_key(trace_id, key),
                    LedgerEntry {
                        reported,
                        outcome: None,
                    },
                );
                Ok(Reservation::Reserved)
            }
        }
    }

    async fn complete(
        &self,
        trace_id: &str,
        key: &str,
        elapsed: ElapsedTime,
    ) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut entries = self.entries.lock().await;
        let entry = entries
            .get_mut(&entry_key(trace_id, key))
            .ok_or_else(|| LedgerError::Backend(format!("key {key} was never reserved")))?;
        entry.outcome = Some(elapsed);
        Ok(())
    }

    async fn release(&self, trace_id: &str, key: &str) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut entries = self.entries.lock().await;
        let entry_key = entry_key(trace_id, key);
        if entries
            .get(&entry_key)
            .is_some_and(|entry| entry.outcome.is_none())
        {
            entries.remove(&entry_key);
        }
        Ok(())
    }
}
