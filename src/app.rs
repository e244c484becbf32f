use crate::counter::DailyCounter;
use crate::domain::{Priority, SessionLength, Task, UiMode};
use crate::history::{HistoryLedger, AVERAGE_WINDOW};
use crate::notifications;
use crate::persistence::{keys, KvStore};
use crate::queue::TaskQueue;
use crate::session::SessionController;
use crate::timer::{CountdownTimer, TimerTick};
use std::time::{Duration, Instant};

/// How long a toast message stays on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Transient status message shown in the footer
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

/// Main application state.
///
/// Owns the store handle and every component built on it. Session
/// completion has exactly two entry points - the countdown reaching zero
/// and the user completing early - and both funnel through
/// `record_completion`; stopping a session touches neither the history
/// nor the daily counter.
pub struct AppState {
    pub store: KvStore,
    pub queue: TaskQueue,
    pub counter: DailyCounter,
    pub history: HistoryLedger,
    pub session: SessionController,
    pub timer: CountdownTimer,
    pub session_length: SessionLength,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub input_buffer: String,
    toast: Option<Toast>,
    last_second: Instant,
}

impl AppState {
    pub fn new(store: KvStore) -> Self {
        let queue = TaskQueue::load(store.clone());
        let counter = DailyCounter::load(store.clone());
        let history = HistoryLedger::load(store.clone());
        let session = SessionController::load(store.clone());
        let session_length: SessionLength =
            store.read(keys::SESSION_LENGTH, SessionLength::default());

        // A session left behind by a previous run comes back paused at
        // its saved remaining time, never running
        let timer = if session.is_active() {
            let remaining: u32 = store.read(keys::TIME_LEFT, session_length.seconds());
            CountdownTimer::resumed_paused(remaining)
        } else {
            CountdownTimer::new()
        };

        Self {
            store,
            queue,
            counter,
            history,
            session,
            timer,
            session_length,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input_buffer: String::new(),
            toast: None,
            last_second: Instant::now(),
        }
    }

    // --- selection -------------------------------------------------------

    pub fn selected_task(&self) -> Option<&Task> {
        self.queue.tasks().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.queue.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.queue.len() {
            self.selected_index = self.queue.len().saturating_sub(1);
        }
    }

    // --- queue actions ---------------------------------------------------

    pub fn open_add_task_form(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_add_task_form(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the input form. Empty (whitespace-only) text is silently
    /// rejected; the form closes either way.
    pub fn submit_new_task(&mut self) {
        let text = self.input_buffer.clone();
        if self
            .queue
            .add_task(&text, Priority::default(), self.session_length.minutes())
            .is_some()
        {
            self.set_toast("Task added");
        }
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected_complete(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.queue.toggle_complete(id);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            if self.queue.remove_task(id).is_some() {
                self.set_toast("Task removed");
            }
            self.clamp_selection();
        }
    }

    pub fn cycle_selected_priority(&mut self) {
        if let Some(task) = self.selected_task() {
            let (id, next) = (task.id, task.priority.next());
            self.queue.set_priority(id, next);
        }
    }

    /// Cycle the session length setting. Locked while a session is
    /// active: the running countdown was started from the old value.
    pub fn cycle_session_length(&mut self) {
        if self.session.is_active() {
            self.set_toast("Session length is locked during a session");
            return;
        }
        self.session_length = self.session_length.next();
        self.store.write(keys::SESSION_LENGTH, &self.session_length);
    }

    // --- session flow ----------------------------------------------------

    /// Start a session on the selected task. Guarded no-op when a session
    /// is already active or the task is already completed.
    pub fn start_selected_session(&mut self) {
        if self.session.is_active() {
            return;
        }
        let Some(task) = self.selected_task().cloned() else {
            return;
        };
        if task.completed {
            return;
        }

        if self.session.start(task) {
            self.timer.start(self.session_length.seconds());
            self.persist_time_left();
            self.set_toast("Focus session started");
        }
    }

    pub fn pause_resume(&mut self) {
        self.timer.pause_resume();
        if !self.timer.is_running() {
            self.persist_time_left();
        }
    }

    /// Complete the current session before the countdown ran out,
    /// crediting only the time actually worked (ceiling minutes; zero is
    /// recorded as zero)
    pub fn complete_session_early(&mut self) {
        if !self.session.is_active() {
            return;
        }

        let planned_min = self.session_length.minutes();
        let worked_seconds = planned_min * 60 - self.timer.remaining_seconds().min(planned_min * 60);
        let Some(task) = self.session.take() else {
            return;
        };

        self.timer.stop();
        self.record_completion(&task, planned_min, worked_seconds);
        self.set_toast("Task marked as complete!");
    }

    /// Discard the current session: the task stays queued and
    /// re-startable, nothing is recorded anywhere
    pub fn stop_session(&mut self) {
        if self.session.take().is_some() {
            self.timer.stop();
            self.persist_time_left();
            self.set_toast("Session stopped");
        }
    }

    /// The countdown reached zero: credit the full planned duration
    fn on_timer_complete(&mut self) {
        let planned_min = self.session_length.minutes();
        if let Some(task) = self.session.take() {
            self.record_completion(&task, planned_min, planned_min * 60);
            notifications::notify_session_complete(&task.text);
            self.set_toast("Good job! Session complete");
        }
    }

    /// Shared bookkeeping for both completion paths
    fn record_completion(&mut self, task: &Task, planned_min: u32, worked_seconds: u32) {
        self.queue.mark_completed(task.id);
        self.history.add_record(&task.text, planned_min, worked_seconds);
        self.counter.increment();
        self.persist_time_left();
    }

    // --- clock -----------------------------------------------------------

    /// Advance the countdown by however many whole seconds have elapsed
    /// since the last call. Invoked from the event loop every poll.
    pub fn tick(&mut self) {
        let whole_seconds = self.last_second.elapsed().as_secs();
        if whole_seconds > 0 {
            self.last_second += Duration::from_secs(whole_seconds);
            self.advance_seconds(whole_seconds as u32);
        }
        self.expire_toast();
    }

    fn advance_seconds(&mut self, seconds: u32) {
        for _ in 0..seconds {
            match self.timer.tick() {
                TimerTick::Advanced => {}
                TimerTick::Completed => {
                    self.on_timer_complete();
                    break;
                }
                TimerTick::Inert => break,
            }
        }
    }

    // --- stats and history actions ----------------------------------------

    pub fn completed_today(&mut self) -> u32 {
        self.counter.get()
    }

    pub fn average_session(&self) -> Option<u32> {
        self.history.average_duration(AVERAGE_WINDOW)
    }

    pub fn clear_today(&mut self) {
        self.counter.reset();
        self.set_toast("Today's sessions cleared!");
    }

    pub fn clear_history(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history.clear();
        self.set_toast("Session history cleared");
    }

    pub fn export_history(&mut self) {
        if self.history.is_empty() {
            self.set_toast("No session history to export!");
            return;
        }

        let dir = self.store.dir().to_path_buf();
        match self.history.export_csv(&dir) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_toast(format!("History exported as {}", name));
            }
            Err(e) => self.set_toast(format!("Export failed: {}", e)),
        }
    }

    // --- toasts and shutdown -----------------------------------------------

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.message.as_str())
    }

    fn set_toast<S: Into<String>>(&mut self, message: S) {
        self.toast = Some(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() > TOAST_TTL {
                self.toast = None;
            }
        }
    }

    /// Pause a running countdown and persist its remaining time. Called
    /// on exit so a mid-session quit can be resumed next run.
    pub fn flush(&mut self) {
        if self.timer.is_running() {
            self.timer.pause_resume();
        }
        self.persist_time_left();
    }

    fn persist_time_left(&self) {
        self.store.write(keys::TIME_LEFT, &self.timer.remaining_seconds());
    }
}
