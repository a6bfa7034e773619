use crate::modules::traces::adapters::outbound::timer_ledger_in_memory::InMemoryTimerLedger;
use crate::modules::traces::adapters::outbound::trace_store_in_memory::InMemoryTraceStore;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use crate::shell::state::AppState;
use crate::tests::fixtures::users::{alice, bob, carol};
use std::sync::Arc;

pub const ALICE_TOKEN: &str = "alice-token-0001";
pub const BOB_TOKEN: &str = "bob-token-0001";

/// Application state over in-memory adapters. Alice and Bob hold tokens,
/// Carol has no token and authenticates with a password.
pub struct TestApp {
    pub state: AppState,
    pub traces: Arc<InMemoryTraceStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(InMemoryTraceStore::new(), seeded_identity())
    }

    pub fn with_offline_trace_store() -> Self {
        let mut traces = InMemoryTraceStore::new();
        traces.toggle_offline();
        Self::build(traces, seeded_identity())
    }

    pub fn with_offline_identity() -> Self {
        let mut identity = seeded_identity();
        identity.toggle_offline();
        Self::build(InMemoryTraceStore::new(), identity)
    }

    fn build(traces: InMemoryTraceStore, identity: InMemoryIdentity) -> Self {
        let traces = Arc::new(traces);
        let state = AppState::new(
            traces.clone(),
            Arc::new(InMemoryTimerLedger::new()),
            Arc::new(identity),
        );
        Self { state, traces }
    }
}

fn seeded_identity() -> InMemoryIdentity {
    InMemoryIdentity::new()
        .with_user(alice(), Some(ALICE_TOKEN.to_string()))
        .with_user(bob(), Some(BOB_TOKEN.to_string()))
        .with_user(carol(), None)
}
