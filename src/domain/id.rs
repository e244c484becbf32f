use chrono::Local;

/// Generator for unique monotonic ids.
///
/// Ids are millisecond timestamps; two ids minted within the same
/// millisecond are forced apart by bumping past the last one handed out,
/// so rapid double-submits cannot collide.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    /// Seed from the largest id already persisted, so ids stay monotonic
    /// across restarts
    pub fn seeded(last: i64) -> Self {
        Self { last }
    }

    pub fn next(&mut self) -> i64 {
        let now = Local::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}
