use crate::modules::traces::core::elapsed_time::ElapsedTime;

/// A time-tracking record owned by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub trace_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub elapsed: ElapsedTime,
    pub created_at: i64,
    pub updated_at: i64,
    /// Number of saves applied since creation. Managed by the store.
    pub version: i64,
}

impl Trace {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

/// A trace as handed to the store for creation; the store assigns the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrace {
    pub trace_id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub elapsed: ElapsedTime,
    pub created_at: i64,
}

impl From<NewTrace> for Trace {
    fn from(new_trace: NewTrace) -> Self {
        Self {
            trace_id: new_trace.trace_id,
            owner_id: new_trace.owner_id,
            name: new_trace.name,
            description: new_trace.description,
            elapsed: new_trace.elapsed,
            created_at: new_trace.created_at,
            updated_at: new_trace.created_at,
            version: 0,
        }
    }
}

#[cfg(test)]
mod trace_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_start_at_version_zero_with_matching_timestamps() {
        let trace = Trace::from(NewTrace {
            trace_id: "te-1".into(),
            owner_id: "user-alice".into(),
            name: "Writing".into(),
            description: String::new(),
            elapsed: ElapsedTime::zero(),
            created_at: 1_700_000_000_000,
        });

        assert_eq!(trace.version, 0);
        assert_eq!(trace.updated_at, trace.created_at);
        assert!(trace.is_owned_by("user-alice"));
        assert!(!trace.is_owned_by("user-bob"));
    }
}
