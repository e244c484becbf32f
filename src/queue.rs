use crate::domain::{IdGen, Priority, Task};
use crate::persistence::{keys, KvStore};

/// The ordered collection of queued focus tasks.
///
/// Insertion order is preserved; every mutation persists the full queue
/// under the `focusSessions` key. Lookup misses are silent no-ops - the
/// UI is expected to only offer valid ids, but a stale id must not
/// corrupt anything.
pub struct TaskQueue {
    tasks: Vec<Task>,
    ids: IdGen,
    store: KvStore,
}

impl TaskQueue {
    /// Load the queue from the store, seeding the id generator past the
    /// largest persisted id
    pub fn load(store: KvStore) -> Self {
        let tasks: Vec<Task> = store.read(keys::FOCUS_SESSIONS, Vec::new());
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            tasks,
            ids: IdGen::seeded(max_id),
            store,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed
    pub fn ready_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a task to the end of the queue. The text is trimmed; an empty
    /// submission creates nothing and returns None.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
        estimated_length_min: u32,
    ) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(self.ids.next(), text.to_string(), priority, estimated_length_min);
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    /// Flip the completed flag of the task with the given id
    pub fn toggle_complete(&mut self, id: i64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.persist();
        }
    }

    /// Remove the task with the given id, returning it for the caller's
    /// notification
    pub fn remove_task(&mut self, id: i64) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(index);
        self.persist();
        Some(removed)
    }

    pub fn set_priority(&mut self, id: i64, priority: Priority) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.priority = priority;
            self.persist();
        }
    }

    /// Force the completed flag on, regardless of prior state. Used by
    /// the session-completion flow, as opposed to the user-driven toggle.
    pub fn mark_completed(&mut self, id: i64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = true;
            self.persist();
        }
    }

    fn persist(&self) {
        self.store.write(keys::FOCUS_SESSIONS, &self.tasks);
    }
}
