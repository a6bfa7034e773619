use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::core::trace::Trace;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("accumulated time would exceed 23:59:59 ({current} + {reported})")]
    ExceedsDay {
        current: ElapsedTime,
        reported: ElapsedTime,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { trace: Trace },
    Rejected { reason: DecideError },
}
