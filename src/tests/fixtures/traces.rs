use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::modules::traces::core::trace::{NewTrace, Trace};

fn parse(elapsed: &str) -> ElapsedTime {
    ElapsedTime::parse(elapsed).expect("fixture elapsed time must be HH:MM:SS")
}

pub struct NewTraceBuilder {
    inner: NewTrace,
}

impl Default for NewTraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewTraceBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewTrace {
                trace_id: "te-fixed-0001".to_string(),
                owner_id: "user-alice".to_string(),
                name: "Writing".to_string(),
                description: "This is a test".to_string(),
                elapsed: ElapsedTime::zero(),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn trace_id(mut self, v: impl Into<String>) -> Self {
        self.inner.trace_id = v.into();
        self
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn elapsed(mut self, v: &str) -> Self {
        self.inner.elapsed = parse(v);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> NewTrace {
        self.inner
    }
}

/// A stored trace, for code that never touches a store.
pub struct TraceBuilder {
    inner: Trace,
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TraceBuilder {
    pub fn new() -> Self {
        Self {
            inner: Trace::from(NewTraceBuilder::new().build()),
        }
    }

    pub fn trace_id(mut self, v: impl Into<String>) -> Self {
        self.inner.trace_id = v.into();
        self
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn elapsed(mut self, v: &str) -> Self {
        self.inner.elapsed = parse(v);
        self
    }

    pub fn version(mut self, v: i64) -> Self {
        self.inner.version = v;
        self
    }

    pub fn build(self) -> Trace {
        self.inner
    }
}

#[cfg(test)]
mod trace_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let trace = TraceBuilder::new()
            .trace_id("te-9")
            .owner_id("user-bob")
            .elapsed("02:00:00")
            .version(3)
            .build();

        assert_eq!(trace.trace_id, "te-9");
        assert_eq!(trace.owner_id, "user-bob");
        assert_eq!(trace.elapsed.to_string(), "02:00:00");
        assert_eq!(trace.version, 3);
        assert_eq!(trace.name, "Writing");
    }

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(NewTraceBuilder::default().build(), NewTraceBuilder::new().build());
    }
}
