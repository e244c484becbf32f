use crate::persistence::files::{atomic_write, read_file};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Persisted key names, one JSON file per key in the storage directory
pub mod keys {
    pub const SESSION_LENGTH: &str = "sessionLength";
    pub const COMPLETED_TODAY: &str = "completedToday";
    pub const COMPLETED_DATE: &str = "completedDate";
    pub const FOCUS_SESSIONS: &str = "focusSessions";
    pub const CURRENT_SESSION: &str = "currentSession";
    pub const SESSION_HISTORY: &str = "sessionHistory";
    pub const TIME_LEFT: &str = "timeLeft";
}

/// Key-value store over per-key JSON files.
///
/// This is the only durability mechanism in the app. Reads never fail:
/// a missing or unreadable value yields the caller's default. Writes that
/// fail are reported on stderr and otherwise absorbed - the in-memory state
/// remains authoritative and the next successful write re-syncs the file.
#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the per-key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`, or `default` if the key is
    /// missing or its contents cannot be deserialized
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match read_file(self.key_path(key)) {
            Ok(text) => serde_json::from_str(&text).unwrap_or(default),
            Err(_) => default,
        }
    }

    /// Serialize `value` under `key`. Failures are reported, not returned.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = atomic_write(self.key_path(key), &json) {
            eprintln!("Failed to persist {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_read_missing_key_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = KvStore::new(temp_dir.path());

        let value: u32 = store.read("absent", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = KvStore::new(temp_dir.path());

        let sample = Sample {
            name: "deep work".to_string(),
            count: 3,
        };
        store.write("sample", &sample);

        let loaded: Sample = store.read(
            "sample",
            Sample {
                name: String::new(),
                count: 0,
            },
        );
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = KvStore::new(temp_dir.path());

        std::fs::write(temp_dir.path().join("broken.json"), "{not json").unwrap();

        let value: Vec<String> = store.read("broken", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = KvStore::new(temp_dir.path());

        store.write("counter", &1u32);
        store.write("counter", &2u32);

        let value: u32 = store.read("counter", 0);
        assert_eq!(value, 2);
    }
}
