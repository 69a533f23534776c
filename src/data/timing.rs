//! Debug instrumentation of row lookups.

use std::time::Duration;

/// Running statistics of lookup durations, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchTimings {
    pub count: u64,
    pub total_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl SearchTimings {
    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        if self.count == 0 {
            self.min_ms = ms;
            self.max_ms = ms;
        } else {
            self.min_ms = self.min_ms.min(ms);
            self.max_ms = self.max_ms.max(ms);
        }
        self.count += 1;
        self.total_ms += ms;
        log::debug!(
            "Search completed for {:.3}ms, average: {:.2}ms [{:.3}; {:.3}].",
            ms,
            self.average_ms(),
            self.min_ms,
            self.max_ms
        );
    }

    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }
}
