use core::time::Duration;
use web_time::Instant;

/// Measures how long a game has been running.
///
/// Starts on the first reveal, freezes once the game is decided and is cleared by a reset.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    pub fn start(&mut self) {
        let now = Instant::now();
        log::debug!("stopwatch started at {:?}", now);
        self.started_at = Some(now);
        self.stopped_at = None;
    }

    pub fn stop(&mut self) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(Instant::now());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    /// Time since start, zero if it never started
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .stopped_at
                .unwrap_or_else(Instant::now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }
}
