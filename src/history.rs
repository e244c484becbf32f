use crate::domain::{IdGen, SessionRecord};
use crate::persistence::{keys, KvStore};
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Task,Planned Duration (min),Actual Duration (min),Date,Time";

/// How many recent records the rolling average covers by default
pub const AVERAGE_WINDOW: usize = 5;

/// Append-only ledger of completed sessions, most recent first.
///
/// Records are prepended on completion and never mutated in place; the
/// only other mutation is clearing the whole ledger. Persists under the
/// `sessionHistory` key.
pub struct HistoryLedger {
    records: Vec<SessionRecord>,
    ids: IdGen,
    store: KvStore,
}

impl HistoryLedger {
    pub fn load(store: KvStore) -> Self {
        let records: Vec<SessionRecord> = store.read(keys::SESSION_HISTORY, Vec::new());
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records,
            ids: IdGen::seeded(max_id),
            store,
        }
    }

    /// Records in ledger order (most recent first)
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a completed session at the head of the ledger. Worked
    /// seconds are converted to ceiling minutes.
    pub fn add_record(
        &mut self,
        task_text: &str,
        planned_duration_min: u32,
        actual_seconds: u32,
    ) -> &SessionRecord {
        let record = SessionRecord::new(
            self.ids.next(),
            task_text.to_string(),
            planned_duration_min,
            actual_seconds,
        );
        self.records.insert(0, record);
        self.persist();
        &self.records[0]
    }

    /// Empty the ledger
    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Rounded mean of actual minutes over the most recent `n` records,
    /// or None when the ledger is empty
    pub fn average_duration(&self, n: usize) -> Option<u32> {
        if self.records.is_empty() {
            return None;
        }

        let recent = &self.records[..n.min(self.records.len())];
        let sum: u32 = recent.iter().map(|r| r.actual_duration_min).sum();
        Some((f64::from(sum) / recent.len() as f64).round() as u32)
    }

    /// The full CSV export text: header plus one row per record in
    /// ledger order
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');

        for record in &self.records {
            let (date, time) = match record.completed_at_local() {
                Some(at) => (
                    at.format("%m/%d/%Y").to_string(),
                    at.format("%H:%M").to_string(),
                ),
                None => (record.date.clone(), String::new()),
            };

            out.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&record.task),
                record.planned_duration_min,
                record.actual_duration_min,
                date,
                time
            ));
        }

        out
    }

    /// Write the CSV export into `dir` as
    /// `session_history-<timestamp>.csv` and return the path. The caller
    /// is responsible for the empty-ledger "nothing to export" case.
    pub fn export_csv(&self, dir: &Path) -> Result<PathBuf> {
        anyhow::ensure!(!self.is_empty(), "No session history to export");

        let filename = format!("session_history-{}.csv", Local::now().to_rfc3339());
        let path = dir.join(filename);
        crate::persistence::atomic_write(&path, &self.to_csv())?;
        Ok(path)
    }

    fn persist(&self) {
        self.store.write(keys::SESSION_HISTORY, &self.records);
    }
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
