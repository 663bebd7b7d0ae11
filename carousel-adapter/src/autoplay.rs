/// An armed auto-advance timer.
///
/// This is a plain deadline, not an OS timer: the adapter polls it from its own frame loop or
/// timer callback. Dropping the value (or replacing the `Option` that holds it) cancels it, so at
/// most one timer can be live per owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoPlay {
    pub interval_ms: u64,
    /// Absolute time (in the adapter's clock) of the next advance.
    pub due_ms: u64,
}

impl AutoPlay {
    /// Arms a fresh, full-length interval starting at `now_ms`.
    pub fn new(now_ms: u64, interval_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            due_ms: now_ms.saturating_add(interval_ms),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.due_ms.saturating_sub(now_ms)
    }

    /// Returns `true` once per elapsed deadline and schedules the next one.
    ///
    /// If the adapter polled late and several intervals were missed, they collapse into a single
    /// advance; the next deadline stays on the original grid.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        let interval_ms = self.interval_ms.max(1);
        let missed = (now_ms - self.due_ms) / interval_ms;
        let step = interval_ms.saturating_mul(missed.saturating_add(1));
        self.due_ms = self.due_ms.saturating_add(step);
        true
    }
}
