use serde::Deserialize;

use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::core::trace::NewTrace;
use crate::shared::core::validation::ValidationErrors;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Raw, unvalidated fields submitted to create a trace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTraceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub trace_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrace {
    pub trace_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub elapsed: ElapsedTime,
    pub created_at: i64,
}

impl CreateTrace {
    pub fn from_input(
        trace_id: impl Into<String>,
        owner_id: impl Into<String>,
        input: CreateTraceInput,
        created_at: i64,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = input.name.unwrap_or_default().trim().to_string();
        if name.is_empty() {
            errors.add("name", "this field is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.add("name", format!("must be at most {MAX_NAME_LEN} characters"));
        }

        let description = input.description.unwrap_or_default();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.add(
                "description",
                format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
            );
        }

        let elapsed = match input.trace_time.as_deref().map(ElapsedTime::parse) {
            None => ElapsedTime::zero(),
            Some(Ok(elapsed)) => elapsed,
            Some(Err(e)) => {
                errors.add("trace_time", e.to_string());
                ElapsedTime::zero()
            }
        };

        errors.into_result(Self {
            trace_id: trace_id.into(),
            owner_id: owner_id.into(),
            name,
            description,
            elapsed,
            created_at,
        })
    }
}

impl From<CreateTrace> for NewTrace {
    fn from(command: CreateTrace) -> Self {
        Self {
            trace_id: command.trace_id,
            owner_id: command.owner_id,
            name: command.name,
            description: command.description,
            elapsed: command.elapsed,
            created_at: command.created_at,
        }
    }
}
