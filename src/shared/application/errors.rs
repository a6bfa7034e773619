use crate::modules::traces::adapters::outbound::timer_ledger::LedgerError;
use crate::modules::traces::adapters::outbound::trace_store::TraceStoreError;
use crate::shared::core::validation::ValidationErrors;
use crate::shared::infrastructure::identity::IdentityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(TraceStoreError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Ledger(LedgerError),
}

impl From<TraceStoreError> for ApplicationError {
    fn from(error: TraceStoreError) -> Self {
        match error {
            TraceStoreError::NotFound(_) => Self::NotFound(error.to_string()),
            TraceStoreError::VersionMismatch { .. } => Self::Conflict(error.to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<LedgerError> for ApplicationError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::KeyReused { .. } | LedgerError::InFlight { .. } => {
                Self::Conflict(error.to_string())
            }
            other => Self::Ledger(other),
        }
    }
}
