use serde::{Deserialize, Serialize};

/// Priority of a queued task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Display label (matches the persisted form)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Next priority in the cycle low -> medium -> high -> low
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Length of a focus session, from the fixed set the app offers.
///
/// Persisted as plain minutes under the `sessionLength` key; an integer
/// outside the set fails deserialization and the store falls back to the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum SessionLength {
    Min25,
    Min45,
    Min90,
    Min120,
}

impl SessionLength {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::Min25 => 25,
            Self::Min45 => 45,
            Self::Min90 => 90,
            Self::Min120 => 120,
        }
    }

    pub fn seconds(&self) -> u32 {
        self.minutes() * 60
    }

    /// Display label for the length selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Min25 => "25 min",
            Self::Min45 => "45 min",
            Self::Min90 => "90 min",
            Self::Min120 => "2 hours",
        }
    }

    /// Next length in the cycle 25 -> 45 -> 90 -> 120 -> 25
    pub fn next(&self) -> Self {
        match self {
            Self::Min25 => Self::Min45,
            Self::Min45 => Self::Min90,
            Self::Min90 => Self::Min120,
            Self::Min120 => Self::Min25,
        }
    }
}

impl Default for SessionLength {
    fn default() -> Self {
        Self::Min90
    }
}

impl From<SessionLength> for u32 {
    fn from(length: SessionLength) -> u32 {
        length.minutes()
    }
}

impl TryFrom<u32> for SessionLength {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            25 => Ok(Self::Min25),
            45 => Ok(Self::Min45),
            90 => Ok(Self::Min90),
            120 => Ok(Self::Min120),
            other => Err(format!("invalid session length: {} minutes", other)),
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_session_length_roundtrip_as_minutes() {
        let json = serde_json::to_string(&SessionLength::Min45).unwrap();
        assert_eq!(json, "45");

        let parsed: SessionLength = serde_json::from_str("120").unwrap();
        assert_eq!(parsed, SessionLength::Min120);
    }

    #[test]
    fn test_session_length_rejects_out_of_set_values() {
        let parsed: Result<SessionLength, _> = serde_json::from_str("30");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_session_length_cycle_covers_all() {
        let start = SessionLength::Min25;
        let mut length = start;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(length.minutes());
            length = length.next();
        }
        assert_eq!(seen, vec![25, 45, 90, 120]);
        assert_eq!(length, start);
    }
}
