use serde::Serialize;

use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::core::trace::Trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceView {
    pub id: String,
    pub user: String,
    pub name: String,
    pub description: String,
    pub trace_time: ElapsedTime,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Trace> for TraceView {
    fn from(trace: Trace) -> Self {
        Self {
            id: trace.trace_id,
            user: trace.owner_id,
            name: trace.name,
            description: trace.description,
            trace_time: trace.elapsed,
            created_at: trace.created_at,
            updated_at: trace.updated_at,
        }
    }
}
