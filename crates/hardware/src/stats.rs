//! Simulation statistics collection.
//!
//! Running counters of stalls by cause and forwards by source/destination
//! stage pair. Counters are monotonically increasing and reset only at
//! simulation start; rendering lives in the presentation layer.

use crate::core::pipeline::forward::ForwardPath;
use crate::core::pipeline::hazards::StallCause;

/// Stall and forwarding counters.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Stall cycles charged to load-use hazards.
    pub stalls_load: u64,
    /// Stall cycles charged to taken branches and jumps.
    pub stalls_branch: u64,
    /// Stall cycles charged to any other cause.
    pub stalls_other: u64,
    /// Forward activations, indexed by [`ForwardPath`].
    pub forwards: [u64; 5],
}

impl SimStats {
    /// Counts one activation of `path`.
    pub fn record_forward(&mut self, path: ForwardPath) {
        self.forwards[path.index()] += 1;
    }

    /// Total activations of `path`.
    pub fn forward_count(&self, path: ForwardPath) -> u64 {
        self.forwards[path.index()]
    }

    /// Counts one stalled cycle against `cause`.
    pub fn record_stall(&mut self, cause: StallCause) {
        match cause {
            StallCause::Load => self.stalls_load += 1,
            StallCause::Branch => self.stalls_branch += 1,
            StallCause::Other => self.stalls_other += 1,
            StallCause::None => {}
        }
    }
}
