use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Round seconds up to whole minutes
pub fn ceil_minutes(seconds: u32) -> u32 {
    seconds.div_ceil(60)
}

/// A completed-session record in the history ledger.
///
/// Immutable once created. Timestamps are stored as strings the way the
/// rest of the app stores them: `completed_at` is RFC 3339, `date` is the
/// calendar-day label derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    /// Task text at completion time, not a live reference
    pub task: String,
    /// Planned session length in minutes
    #[serde(rename = "plannedDuration")]
    pub planned_duration_min: u32,
    /// Actual time worked, in minutes rounded up
    #[serde(rename = "actualDuration")]
    pub actual_duration_min: u32,
    /// RFC 3339 completion timestamp
    #[serde(rename = "completedAt")]
    pub completed_at: String,
    /// Calendar day of completion (YYYY-MM-DD)
    pub date: String,
}

impl SessionRecord {
    /// Build a record completed now, converting worked seconds to
    /// ceiling minutes
    pub fn new(id: i64, task: String, planned_duration_min: u32, actual_seconds: u32) -> Self {
        let now = Local::now();
        Self {
            id,
            task,
            planned_duration_min,
            actual_duration_min: ceil_minutes(actual_seconds),
            completed_at: now.to_rfc3339(),
            date: now.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parse the completion timestamp back for display
    pub fn completed_at_local(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.completed_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }

    /// Share of the planned duration actually worked, as a percentage.
    /// Returns None when the full session was worked (or more).
    pub fn percent_of_planned(&self) -> Option<u32> {
        if self.actual_duration_min >= self.planned_duration_min || self.planned_duration_min == 0
        {
            return None;
        }
        Some((self.actual_duration_min * 100) / self.planned_duration_min)
    }
}
