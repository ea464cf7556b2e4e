//! Completed-items counter shared between workers.
//!
//! Progress is a side channel: the counter advances atomically as items
//! finish and emits a `debug`-level trace line, never affecting result
//! ordering or the semantics of the mapped function.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Monotonic counter of completed items.
pub(crate) struct Progress {
    done: AtomicU64,
    total: u64,
    enabled: bool,
}

impl Progress {
    pub(crate) fn new(total: usize, enabled: bool) -> Self {
        Self {
            done: AtomicU64::new(0),
            total: total as u64,
            enabled,
        }
    }

    /// Records one completed item.
    pub(crate) fn tick(&self) {
        if !self.enabled {
            return;
        }
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(done, total = self.total, "batch progress");
    }

    #[cfg(test)]
    pub(crate) fn completed(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_advances_monotonically() {
        let progress = Progress::new(3, true);
        assert_eq!(progress.completed(), 0);
        progress.tick();
        progress.tick();
        assert_eq!(progress.completed(), 2);
    }

    #[test]
    fn test_disabled_counter_stays_zero() {
        let progress = Progress::new(3, false);
        progress.tick();
        assert_eq!(progress.completed(), 0);
    }
}
