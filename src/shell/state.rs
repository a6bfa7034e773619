use crate::modules::accounts::use_cases::current_user::handler::CurrentUserHandler;
use crate::modules::accounts::use_cases::issue_token::handler::IssueTokenHandler;
use crate::modules::traces::adapters::outbound::timer_ledger_in_memory::InMemoryTimerLedger;
use crate::modules::traces::adapters::outbound::trace_store_in_memory::InMemoryTraceStore;
use crate::modules::traces::use_cases::accumulate_time::handler::AccumulateTimeHandler;
use crate::modules::traces::use_cases::create_trace::handler::CreateTraceHandler;
use crate::modules::traces::use_cases::delete_trace::handler::DeleteTraceHandler;
use crate::modules::traces::use_cases::list_traces_by_owner::handler::ListTracesHandler;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<InMemoryIdentity>,
    pub accumulate_handler: Arc<AccumulateTimeHandler<InMemoryTraceStore, InMemoryTimerLedger>>,
    pub create_handler: Arc<CreateTraceHandler<InMemoryTraceStore>>,
    pub list_handler: Arc<ListTracesHandler<InMemoryTraceStore>>,
    pub delete_handler: Arc<DeleteTraceHandler<InMemoryTraceStore>>,
    pub current_user_handler: Arc<CurrentUserHandler<InMemoryIdentity>>,
    pub issue_token_handler: Arc<IssueTokenHandler<InMemoryIdentity>>,
}

impl AppState {
    pub fn new(
        traces: Arc<InMemoryTraceStore>,
        ledger: Arc<InMemoryTimerLedger>,
        identity: Arc<InMemoryIdentity>,
    ) -> Self {
        Self {
            accumulate_handler: Arc::new(AccumulateTimeHandler::new(traces.clone(), ledger)),
            create_handler: Arc::new(CreateTraceHandler::new(traces.clone())),
            list_handler: Arc::new(ListTracesHandler::new(traces.clone())),
            delete_handler: Arc::new(DeleteTraceHandler::new(traces)),
            current_user_handler: Arc::new(CurrentUserHandler::new(identity.clone())),
            issue_token_handler: Arc::new(IssueTokenHandler::new(identity.clone())),
            identity,
        }
    }
}
