use std::time::{Duration, Instant};

/// Tracks when the snake last moved and whether it's time for the next move
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Clock {
    step: Duration,
    last_update: Option<Instant>,
}

impl Clock {
    /// Create a clock that fires at most once per `step`.  The first check is
    /// always due.
    pub(super) fn new(step: Duration) -> Clock {
        Clock {
            step,
            last_update: None,
        }
    }

    /// Whether strictly more than `step` has elapsed since the last update
    pub(super) fn due(&self, now: Instant) -> bool {
        self.last_update
            .is_none_or(|last| now.saturating_duration_since(last) > self.step)
    }

    /// Mark `now` as the time of the latest update
    pub(super) fn record(&mut self, now: Instant) {
        self.last_update = Some(now);
    }

    /// How long to wait from `now` before checking [`Clock::due()`] again
    pub(super) fn until_due(&self, now: Instant) -> Duration {
        match self.last_update {
            Some(last) => (last + self.step).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }
}
