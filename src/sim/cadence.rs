//! Frame-driven periodic countdowns
//!
//! Time only moves when the host ticks. Remainders carry over, so a long
//! frame can fire a cadence more than once.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    /// Period in microseconds
    pub period: u64,
    /// Time accumulated toward the next firing
    pub elapsed: u64,
}

impl Cadence {
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
        }
    }

    /// Accumulate `dt` microseconds and return how many periods completed
    pub fn advance(&mut self, dt: u64) -> u32 {
        self.elapsed += dt;
        let fires = self.elapsed / self.period;
        self.elapsed %= self.period;
        fires as u32
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
