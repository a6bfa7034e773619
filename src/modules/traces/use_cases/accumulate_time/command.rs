use crate::modules::traces::core::elapsed_time::ElapsedTime;
use crate::shared::core::validation::ValidationErrors;

const MAX_IDEMPOTENCY_KEY_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulateTime {
    pub trace_id: String,
    pub reported: ElapsedTime,
    pub idempotency_key: Option<String>,
    pub reported_at: i64,
}

impl AccumulateTime {
    /// Builds the command from raw request input, collecting every field error.
    pub fn from_input(
        trace_id: impl Into<String>,
        time: Option<&str>,
        idempotency_key: Option<String>,
        reported_at: i64,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let reported = match time.map(ElapsedTime::parse) {
            Some(Ok(reported)) => Some(reported),
            Some(Err(e)) => {
                errors.add("time", e.to_string());
                None
            }
            None => {
                errors.add("time", "this field is required");
                None
            }
        };

        if let Some(key) = idempotency_key.as_deref() {
            if key.trim().is_empty() {
                errors.add("idempotency_key", "must not be blank");
            } else if key.len() > MAX_IDEMPOTENCY_KEY_LEN {
                errors.add(
                    "idempotency_key",
                    format!("must be at most {MAX_IDEMPOTENCY_KEY_LEN} characters"),
                );
            }
        }

        match reported {
            Some(reported) if errors.is_empty() => Ok(Self {
                trace_id: trace_id.into(),
                reported,
                idempotency_key,
                reported_at,
            }),
            _ => Err(errors),
        }
    }
}
