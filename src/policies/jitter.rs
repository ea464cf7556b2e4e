//! # Jitter for retry waits.
//!
//! When a whole batch fails against the same endpoint — a host going down
//! mid-download, a rate limiter kicking in — every wrapped item computes the
//! same backoff wait and the retries arrive as one synchronized wave.
//! [`Jitter`] breaks that wave up by randomizing each item's wait
//! independently.
//!
//! The randomization is applied by [`Backoff::wait_after`](crate::Backoff)
//! to the already-clamped base wait, and the result never feeds back into
//! the next attempt's calculation.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use batchkit::Jitter;
//!
//! let base = Duration::from_millis(800);
//!
//! // Full jitter may shrink the wait all the way to zero...
//! assert!(Jitter::Full.apply(base) <= base);
//!
//! // ...while equal jitter keeps at least half of it.
//! let balanced = Jitter::Equal.apply(base);
//! assert!(balanced >= base / 2 && balanced <= base);
//! ```

use rand::Rng;
use std::time::Duration;

/// Randomization applied to a computed backoff wait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Jitter {
    /// Use the exact backoff wait.
    ///
    /// The default, and the only variant whose waits are non-decreasing
    /// across attempts — pick it when wait bounds must be predictable, e.g.
    /// a single retried operation with no herd to spread.
    #[default]
    None,

    /// Random wait in `[0, base]`.
    ///
    /// Maximum spreading; individual items may retry almost immediately.
    Full,

    /// Random wait in `[base/2, base]`.
    ///
    /// Spreads the herd while preserving most of the backoff, at least half
    /// of it in the worst case. A reasonable pick for shared endpoints.
    Equal,
}

impl Jitter {
    /// Applies this jitter to a base wait.
    ///
    /// [`Jitter::None`] returns the wait untouched (including sub-millisecond
    /// precision); the randomizing variants work at millisecond granularity
    /// and map a zero base to a zero wait.
    pub fn apply(&self, wait: Duration) -> Duration {
        let ms = wait.as_millis() as u64;
        match self {
            Jitter::None => wait,
            Jitter::Full | Jitter::Equal if ms == 0 => Duration::ZERO,
            Jitter::Full => Duration::from_millis(rand::rng().random_range(0..=ms)),
            Jitter::Equal => {
                // Floor at half the base; the spread tops out exactly at it.
                let floor = ms / 2;
                let spread = ms - floor;
                Duration::from_millis(floor + rand::rng().random_range(0..=spread))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity_even_below_a_millisecond() {
        let wait = Duration::from_micros(250);
        assert_eq!(Jitter::None.apply(wait), wait);
    }

    #[test]
    fn test_zero_wait_stays_zero() {
        assert_eq!(Jitter::Full.apply(Duration::ZERO), Duration::ZERO);
        assert_eq!(Jitter::Equal.apply(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_full_jitter_never_exceeds_the_base() {
        let base = Duration::from_millis(640);
        for _ in 0..200 {
            assert!(Jitter::Full.apply(base) <= base);
        }
    }

    #[test]
    fn test_equal_jitter_keeps_at_least_half() {
        let base = Duration::from_millis(641); // odd, exercises the floor split
        for _ in 0..200 {
            let wait = Jitter::Equal.apply(base);
            assert!(wait >= Duration::from_millis(320));
            assert!(wait <= base);
        }
    }
}
