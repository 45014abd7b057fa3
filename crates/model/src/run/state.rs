use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single scheduled run.
///
/// Success path: `Pending -> Fetching -> Fetched -> Sinking -> Done`.
/// Failure path: `Fetching -> Failed -> Notified`. No retries between
/// states; a failed run is only ever re-attempted as a brand-new run by
/// whatever schedules the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Pending,
    Fetching,
    Fetched,
    Sinking,
    Done,
    Failed,
    Notified,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Pending => "pending",
            RunState::Fetching => "fetching",
            RunState::Fetched => "fetched",
            RunState::Sinking => "sinking",
            RunState::Done => "done",
            RunState::Failed => "failed",
            RunState::Notified => "notified",
        };
        write!(f, "{name}")
    }
}
