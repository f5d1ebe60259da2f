//! Round-robin picker.
//!
//! Cycles through the candidate list using an atomic counter. The
//! index is taken modulo the length of the list supplied on each call,
//! so it stays in range when the candidate set grows or shrinks.
//! Lock-free and safe for concurrent access.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::plugins::{Picker, Plugin};
use crate::types::{PickResult, SchedulingContext, ScoredPod};

/// Registry name of the round-robin picker.
pub const ROUND_ROBIN_PICKER: &str = "roundrobin";

/// Picks pods in a round-robin fashion.
///
/// Every non-empty pick takes a distinct counter value via `fetch_add`,
/// which wraps on overflow. Empty picks leave the counter untouched.
#[derive(Debug)]
pub struct RoundRobinPicker {
    counter: AtomicU64,
}

impl RoundRobinPicker {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    fn starting_at(value: u64) -> Self {
        Self {
            counter: AtomicU64::new(value),
        }
    }

    /// Current counter value (for diagnostics).
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Default for RoundRobinPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for RoundRobinPicker {
    fn name(&self) -> &'static str {
        ROUND_ROBIN_PICKER
    }
}

impl Picker for RoundRobinPicker {
    fn pick<'a>(&self, ctx: &SchedulingContext, candidates: &'a [ScoredPod]) -> PickResult<'a> {
        if candidates.is_empty() {
            return PickResult::empty();
        }

        let current = self.counter.fetch_add(1, Ordering::Relaxed);
        // The remainder is below `candidates.len()`, so it fits in usize.
        let index = (current % candidates.len() as u64) as usize;

        debug!(
            request_id = %ctx.request_id,
            index,
            candidates = candidates.len(),
            pods = ?candidates,
            "selecting pod in round-robin fashion"
        );

        PickResult::selected(&candidates[index])
    }
}
