// Requests-per-second from successive cumulative totals.
//
// Elapsed time uses tokio's monotonic Instant. A total lower than the previous
// one (pod restart, scale-down) counts as zero new requests for that step; the
// size of the reset is not recovered.

use crate::models::TrafficStats;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateState {
    pub last_cumulative_total: u64,
    pub last_timestamp: Instant,
    pub last_rate: f64,
    pub last_total_hits: u64,
}

impl RateState {
    pub fn new(start: Instant) -> Self {
        Self {
            last_cumulative_total: 0,
            last_timestamp: start,
            last_rate: 0.0,
            last_total_hits: 0,
        }
    }

    fn observe(&mut self, new_total: u64, now: Instant) -> TrafficStats {
        let delta_total = new_total.saturating_sub(self.last_cumulative_total);
        let elapsed = now.saturating_duration_since(self.last_timestamp);
        // Zero elapsed time keeps the previous rate.
        if !elapsed.is_zero() {
            self.last_rate = round_one_decimal(delta_total as f64 / elapsed.as_secs_f64());
        }
        self.last_cumulative_total = new_total;
        self.last_timestamp = now;
        self.last_total_hits = new_total;
        self.traffic()
    }

    pub fn traffic(&self) -> TrafficStats {
        TrafficStats {
            rps: self.last_rate,
            total_hits: self.last_total_hits,
        }
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Process-wide rate state. All reads and writes go through the mutex.
pub struct RateEstimator {
    state: Mutex<RateState>,
}

impl Default for RateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RateEstimator {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            state: Mutex::new(RateState::new(start)),
        }
    }

    /// Holds the exclusion scope so a caller can sample and observe as one step.
    pub async fn lock(&self) -> RateGuard<'_> {
        RateGuard(self.state.lock().await)
    }

    pub async fn observe(&self, new_total: u64, now: Instant) -> TrafficStats {
        self.lock().await.observe(new_total, now)
    }

    /// Copy of the current state.
    pub async fn state(&self) -> RateState {
        *self.state.lock().await
    }
}

pub struct RateGuard<'a>(MutexGuard<'a, RateState>);

impl RateGuard<'_> {
    pub fn observe(&mut self, new_total: u64, now: Instant) -> TrafficStats {
        self.0.observe(new_total, now)
    }
}
