use crate::persistence::{keys, KvStore};
use chrono::{Local, NaiveDate};

/// Count of sessions completed today, paired with the day it belongs to.
///
/// The rollover check runs before every read or write: the moment the
/// calendar day changes, the count is reset to zero before anything else
/// is honored. Persists under `completedToday` + `completedDate`.
pub struct DailyCounter {
    count: u32,
    last_reset: String,
    store: KvStore,
}

impl DailyCounter {
    pub fn load(store: KvStore) -> Self {
        let count = store.read(keys::COMPLETED_TODAY, 0u32);
        let last_reset = store.read(keys::COMPLETED_DATE, String::new());
        Self {
            count,
            last_reset,
            store,
        }
    }

    fn date_label(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Today's completed-session count
    pub fn get(&mut self) -> u32 {
        self.get_at(Local::now().date_naive())
    }

    pub(crate) fn get_at(&mut self, today: NaiveDate) -> u32 {
        self.roll_over(today);
        self.count
    }

    /// Record one more completed session
    pub fn increment(&mut self) {
        self.increment_at(Local::now().date_naive());
    }

    pub(crate) fn increment_at(&mut self, today: NaiveDate) {
        self.roll_over(today);
        self.count += 1;
        self.persist();
    }

    /// Explicit "clear today" action
    pub fn reset(&mut self) {
        self.reset_at(Local::now().date_naive());
    }

    pub(crate) fn reset_at(&mut self, today: NaiveDate) {
        self.count = 0;
        self.last_reset = Self::date_label(today);
        self.persist();
    }

    fn roll_over(&mut self, today: NaiveDate) {
        let label = Self::date_label(today);
        if self.last_reset != label {
            self.count = 0;
            self.last_reset = label;
            self.persist();
        }
    }

    fn persist(&self) {
        self.store.write(keys::COMPLETED_TODAY, &self.count);
        self.store.write(keys::COMPLETED_DATE, &self.last_reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn counter_in(dir: &std::path::Path) -> DailyCounter {
        DailyCounter::load(KvStore::new(dir))
    }

    #[test]
    fn test_starts_at_zero() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut counter = counter_in(temp_dir.path());
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_increment_counts_up_within_a_day() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut counter = counter_in(temp_dir.path());

        let today = Local::now().date_naive();
        counter.increment_at(today);
        counter.increment_at(today);
        assert_eq!(counter.get_at(today), 2);
    }

    #[test]
    fn test_midnight_rollover_resets_before_increment() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut counter = counter_in(temp_dir.path());

        let yesterday = Local::now().date_naive() - Duration::days(1);
        let today = Local::now().date_naive();

        // Sessions completed at 23:59:59...
        counter.increment_at(yesterday);
        counter.increment_at(yesterday);
        assert_eq!(counter.get_at(yesterday), 2);

        // ...must not carry into the next day: reset to 0, then increment to 1
        counter.increment_at(today);
        assert_eq!(counter.get_at(today), 1);
    }

    #[test]
    fn test_read_after_midnight_sees_zero() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut counter = counter_in(temp_dir.path());

        let yesterday = Local::now().date_naive() - Duration::days(1);
        counter.increment_at(yesterday);

        let today = Local::now().date_naive();
        assert_eq!(counter.get_at(today), 0);
    }

    #[test]
    fn test_explicit_reset_clears_today() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut counter = counter_in(temp_dir.path());

        let today = Local::now().date_naive();
        counter.increment_at(today);
        counter.increment_at(today);
        counter.reset_at(today);
        assert_eq!(counter.get_at(today), 0);
    }

    #[test]
    fn test_count_persists_across_loads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let today = Local::now().date_naive();
        {
            let mut counter = counter_in(temp_dir.path());
            counter.increment_at(today);
            counter.increment_at(today);
            counter.increment_at(today);
        }

        let mut reloaded = counter_in(temp_dir.path());
        assert_eq!(reloaded.get_at(today), 3);
    }
}
