use std::time::Duration;

/// Event-poll interval for the TUI loop, in milliseconds. The countdown
/// itself advances in whole seconds; polling faster just keeps the UI
/// responsive.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_poll_interval_finer_than_one_second() {
        assert!(tick_duration() < Duration::from_secs(1));
    }
}
