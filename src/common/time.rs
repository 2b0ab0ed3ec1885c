//! Monotonic timing used for latency fields in log events.

use std::time::Instant;

#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`Stopwatch::start`].
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
