/// Phase of the countdown timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

/// What a single tick did.
///
/// `Completed` is reported exactly once per run, on the tick that takes
/// the remaining time from 1 to 0 while running. The caller reacts to it
/// with whatever session context is current at that moment; the timer
/// holds no callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Nothing happened (not running, or already at zero)
    Inert,
    /// One second elapsed, time still remaining
    Advanced,
    /// The countdown just reached zero
    Completed,
}

/// Countdown timer: a remaining-seconds value and a running flag.
///
/// Pure in-memory state machine; the scheduling substrate (the TUI event
/// loop) calls `tick()` once per elapsed second while running.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining_seconds: u32,
    running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining_seconds: 0,
            running: false,
        }
    }

    /// Rebuild a paused timer with time already on the clock, for
    /// restoring an interrupted session at startup. Zero remaining means
    /// there is nothing to resume, so the timer starts idle.
    pub fn resumed_paused(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            running: false,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_seconds > 0 {
            TimerPhase::Paused
        } else {
            TimerPhase::Idle
        }
    }

    /// Start a fresh countdown. Valid from any state.
    pub fn start(&mut self, duration_seconds: u32) {
        self.remaining_seconds = duration_seconds;
        self.running = true;
    }

    /// Toggle between Running and Paused. No-op from Idle.
    pub fn pause_resume(&mut self) {
        if self.phase() == TimerPhase::Idle {
            return;
        }
        self.running = !self.running;
    }

    /// Reset to Idle without reporting completion
    pub fn stop(&mut self) {
        self.remaining_seconds = 0;
        self.running = false;
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TimerTick {
        if !self.running {
            return TimerTick::Inert;
        }
        // A running timer that somehow sits at zero must not report a
        // completion it never counted down to
        if self.remaining_seconds == 0 {
            self.running = false;
            return TimerTick::Inert;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.running = false;
            TimerTick::Completed
        } else {
            TimerTick::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let timer = CountdownTimer::new();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut timer = CountdownTimer::new();
        timer.start(10);
        assert_eq!(timer.phase(), TimerPhase::Running);

        let mut completions = 0;
        for _ in 0..10 {
            if timer.tick() == TimerTick::Completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(timer.phase(), TimerPhase::Idle);

        // A spurious 11th tick must not re-fire
        assert_eq!(timer.tick(), TimerTick::Inert);
    }

    #[test]
    fn test_no_completion_from_initial_zero_state() {
        let mut timer = CountdownTimer::new();
        assert_eq!(timer.tick(), TimerTick::Inert);
        assert_eq!(timer.tick(), TimerTick::Inert);
    }

    #[test]
    fn test_pause_stops_ticking() {
        let mut timer = CountdownTimer::new();
        timer.start(5);
        assert_eq!(timer.tick(), TimerTick::Advanced);

        timer.pause_resume();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert_eq!(timer.tick(), TimerTick::Inert);
        assert_eq!(timer.remaining_seconds(), 4);

        timer.pause_resume();
        assert_eq!(timer.tick(), TimerTick::Advanced);
        assert_eq!(timer.remaining_seconds(), 3);
    }

    #[test]
    fn test_pause_resume_is_noop_when_idle() {
        let mut timer = CountdownTimer::new();
        timer.pause_resume();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_never_reports_completion() {
        let mut timer = CountdownTimer::new();
        timer.start(3);
        timer.tick();
        timer.stop();

        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.tick(), TimerTick::Inert);
    }

    #[test]
    fn test_start_replaces_previous_run() {
        let mut timer = CountdownTimer::new();
        timer.start(10);
        timer.tick();
        timer.start(20);

        assert_eq!(timer.remaining_seconds(), 20);
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_resumed_paused_restores_clock() {
        let timer = CountdownTimer::resumed_paused(300);
        assert_eq!(timer.phase(), TimerPhase::Paused);
        assert_eq!(timer.remaining_seconds(), 300);

        let timer = CountdownTimer::resumed_paused(0);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_full_session_tick_count() {
        let mut timer = CountdownTimer::new();
        timer.start(1500);
        for _ in 0..1499 {
            assert_eq!(timer.tick(), TimerTick::Advanced);
        }
        assert_eq!(timer.tick(), TimerTick::Completed);
    }
}
