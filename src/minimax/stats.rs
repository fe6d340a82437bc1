//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one symbol-phase search.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes evaluated, including leaves.
    pub nodes: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
