use crate::domain::Task;
use crate::persistence::{keys, KvStore};

/// Holder of the single current session.
///
/// At most one task can be in session at a time; `start` refuses a second
/// one. All three ways a session ends (on-time completion, early
/// completion, stop) go through `take`, which clears the slot - the
/// bookkeeping that differs between those paths lives in the app.
/// Persists under the `currentSession` key so an interrupted session is
/// found again at startup.
pub struct SessionController {
    current: Option<Task>,
    store: KvStore,
}

impl SessionController {
    pub fn load(store: KvStore) -> Self {
        let current: Option<Task> = store.read(keys::CURRENT_SESSION, None);
        Self { current, store }
    }

    pub fn current(&self) -> Option<&Task> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Make `task` the current session. Returns false (and changes
    /// nothing) if a session is already active - the UI should not offer
    /// this, but the invariant is guarded here regardless.
    pub fn start(&mut self, task: Task) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.current = Some(task);
        self.persist();
        true
    }

    /// End the current session, handing its task back to the caller.
    /// Returns None (guarded no-op) when no session is active.
    pub fn take(&mut self) -> Option<Task> {
        let task = self.current.take()?;
        self.persist();
        Some(task)
    }

    fn persist(&self) {
        self.store.write(keys::CURRENT_SESSION, &self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn task(id: i64, text: &str) -> Task {
        Task::new(id, text.to_string(), Priority::Medium, 90)
    }

    fn controller_in(dir: &std::path::Path) -> SessionController {
        SessionController::load(KvStore::new(dir))
    }

    #[test]
    fn test_starts_with_no_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let controller = controller_in(temp_dir.path());
        assert!(!controller.is_active());
    }

    #[test]
    fn test_start_rejects_second_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(temp_dir.path());

        assert!(controller.start(task(1, "first")));
        assert!(!controller.start(task(2, "second")));
        assert_eq!(controller.current().unwrap().id, 1);
    }

    #[test]
    fn test_take_clears_the_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut controller = controller_in(temp_dir.path());

        controller.start(task(1, "work"));
        let taken = controller.take().unwrap();
        assert_eq!(taken.text, "work");
        assert!(!controller.is_active());

        // Ending with no session is a guarded no-op
        assert!(controller.take().is_none());
    }

    #[test]
    fn test_session_survives_restart() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut controller = controller_in(temp_dir.path());
            controller.start(task(7, "interrupted"));
        }

        let reloaded = controller_in(temp_dir.path());
        assert_eq!(reloaded.current().unwrap().id, 7);
    }

    #[test]
    fn test_taken_session_stays_gone_after_restart() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut controller = controller_in(temp_dir.path());
            controller.start(task(7, "done"));
            controller.take();
        }

        let reloaded = controller_in(temp_dir.path());
        assert!(!reloaded.is_active());
    }
}
