// Pure decision function for the timer operation.
//
// - Adds the reported duration to the trace's elapsed time.
// - Rejects a total of a full day or more; the trace is left as it is.
// - Never performs input or output.

use crate::modules::traces::core::trace::Trace;
use crate::modules::traces::use_cases::accumulate_time::command::AccumulateTime;
use crate::modules::traces::use_cases::accumulate_time::decision::{DecideError, Decision};

pub fn decide_accumulate(trace: &Trace, command: &AccumulateTime) -> Decision {
    match trace.elapsed.checked_add(command.reported) {
        Some(elapsed) => Decision::Accepted {
            trace: Trace {
                elapsed,
                updated_at: command.reported_at,
                ..trace.clone()
            },
        },
        None => Decision::Rejected {
            reason: DecideError::ExceedsDay {
                current: trace.elapsed,
                reported: command.reported,
            },
        },
    }
}
