use super::enums::Priority;
use serde::{Deserialize, Serialize};

fn default_estimate() -> u32 {
    90
}

/// A queued focus task.
///
/// Serialized field names follow the persisted storage contract: the task
/// text is stored under `task` and the estimate under `estimatedLength`
/// (minutes). Records written before the estimate existed load with a
/// 90-minute default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique monotonic id (millisecond timestamp, see `IdGen`)
    pub id: i64,
    /// Task text, trimmed and non-empty
    #[serde(rename = "task")]
    pub text: String,
    /// Whether the task has been completed
    pub completed: bool,
    pub priority: Priority,
    /// Estimated length in minutes
    #[serde(rename = "estimatedLength", default = "default_estimate")]
    pub estimated_length_min: u32,
}

impl Task {
    pub fn new(id: i64, text: String, priority: Priority, estimated_length_min: u32) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
            estimated_length_min,
        }
    }
}
