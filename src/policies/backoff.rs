//! # Backoff schedule for retry waits.
//!
//! [`Backoff`] controls how long to wait between consecutive attempts of a
//! retried operation. It is parameterized by:
//! - [`Backoff::first`] the wait after the first failed attempt;
//! - [`Backoff::max`] the maximum wait cap;
//! - [`Backoff::factor`] the multiplicative growth factor.
//!
//! The wait after attempt `k` (1-based) is `first × factor^(k-1)`, clamped to
//! the `[first, max]` range, then jitter is applied. The base wait is derived
//! purely from the attempt number, so jitter output never feeds back into
//! subsequent waits.
//!
//! Configuring `first == max` degenerates to a fixed wait between attempts,
//! which is the shape [`RetryPolicy::fixed`](crate::RetryPolicy::fixed) uses.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use batchkit::{Backoff, Jitter};
//!
//! let backoff = Backoff {
//!     first: Duration::from_millis(100),
//!     max: Duration::from_secs(10),
//!     factor: 2.0,
//!     jitter: Jitter::None,
//! };
//!
//! // After attempt 1 — waits `first` (100ms)
//! assert_eq!(backoff.wait_after(1), Duration::from_millis(100));
//!
//! // After attempt 2 — first × factor = 200ms
//! assert_eq!(backoff.wait_after(2), Duration::from_millis(200));
//!
//! // After attempt 11 — 100ms × 2^10 = 102_400ms → capped at max=10s
//! assert_eq!(backoff.wait_after(11), Duration::from_secs(10));
//! ```

use std::time::Duration;

use crate::policies::jitter::Jitter;

/// Wait schedule between retry attempts.
///
/// Encapsulates the parameters that determine how retry waits grow:
/// - [`Backoff::first`] — the initial wait;
/// - [`Backoff::max`] — the maximum wait cap;
/// - [`Backoff::factor`] — multiplicative growth factor.
#[derive(Clone, Copy, Debug)]
pub struct Backoff {
    /// Wait after the first failed attempt.
    pub first: Duration,
    /// Maximum wait cap.
    pub max: Duration,
    /// Multiplicative growth factor (`>= 1.0` recommended).
    pub factor: f64,
    /// Jitter applied to the computed wait.
    pub jitter: Jitter,
}

impl Default for Backoff {
    /// Returns a schedule with:
    /// - `first = 500ms`;
    /// - `max = 20s`;
    /// - `factor = 2.0`;
    /// - no jitter.
    fn default() -> Self {
        Self {
            first: Duration::from_millis(500),
            max: Duration::from_secs(20),
            factor: 2.0,
            jitter: Jitter::None,
        }
    }
}

impl Backoff {
    /// Returns a fixed-wait schedule: the same `wait` after every attempt.
    pub fn fixed(wait: Duration) -> Self {
        Self {
            first: wait,
            max: wait,
            factor: 1.0,
            jitter: Jitter::None,
        }
    }

    /// Computes the wait inserted after the given attempt number (1-based).
    ///
    /// The base wait is `first × factor^(attempt-1)`, clamped to the
    /// `[first, max]` range. Jitter is applied to the clamped base; the result
    /// is never fed back into subsequent waits.
    ///
    /// # Notes
    /// - If `factor` equals 1.0, the wait stays constant at `first`.
    /// - If `factor` is greater than 1.0, waits grow exponentially up to `max`.
    /// - A `first` larger than `max` is capped at `max`.
    pub fn wait_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let max_secs = self.max.as_secs_f64();
        let unclamped_secs = self.first.as_secs_f64() * self.factor.powi(exponent);

        let base = if !unclamped_secs.is_finite() || unclamped_secs > max_secs {
            self.max
        } else {
            Duration::from_secs_f64(unclamped_secs.max(0.0))
                .clamp(self.first.min(self.max), self.max)
        };

        self.jitter.apply(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(first_ms: u64, max_secs: u64, factor: f64) -> Backoff {
        Backoff {
            first: Duration::from_millis(first_ms),
            max: Duration::from_secs(max_secs),
            factor,
            jitter: Jitter::None,
        }
    }

    #[test]
    fn test_attempt_one_waits_first() {
        assert_eq!(plain(100, 30, 2.0).wait_after(1), Duration::from_millis(100));
    }

    #[test]
    fn test_exponential_growth_no_jitter() {
        let backoff = plain(100, 30, 2.0);
        assert_eq!(backoff.wait_after(1), Duration::from_millis(100));
        assert_eq!(backoff.wait_after(2), Duration::from_millis(200));
        assert_eq!(backoff.wait_after(3), Duration::from_millis(400));
        assert_eq!(backoff.wait_after(4), Duration::from_millis(800));
        assert_eq!(backoff.wait_after(5), Duration::from_millis(1600));
    }

    #[test]
    fn test_constant_factor() {
        let backoff = plain(500, 30, 1.0);
        for attempt in 1..=10 {
            assert_eq!(
                backoff.wait_after(attempt),
                Duration::from_millis(500),
                "attempt {} should wait a constant 500ms",
                attempt
            );
        }
    }

    #[test]
    fn test_waits_non_decreasing_until_clamp() {
        let backoff = plain(100, 2, 2.0);
        let mut prev = Duration::ZERO;
        for attempt in 1..=12 {
            let wait = backoff.wait_after(attempt);
            assert!(wait >= backoff.first, "attempt {} below floor", attempt);
            assert!(wait <= backoff.max, "attempt {} above cap", attempt);
            assert!(wait >= prev, "attempt {} decreased", attempt);
            prev = wait;
        }
        assert_eq!(prev, backoff.max);
    }

    #[test]
    fn test_clamped_to_max() {
        assert_eq!(plain(100, 1, 2.0).wait_after(11), Duration::from_secs(1));
    }

    #[test]
    fn test_first_exceeds_max() {
        let backoff = Backoff {
            first: Duration::from_secs(10),
            max: Duration::from_secs(5),
            factor: 2.0,
            jitter: Jitter::None,
        };
        assert_eq!(backoff.wait_after(1), Duration::from_secs(5));
    }

    #[test]
    fn test_fixed_schedule() {
        let backoff = Backoff::fixed(Duration::from_millis(250));
        for attempt in 1..=8 {
            assert_eq!(backoff.wait_after(attempt), Duration::from_millis(250));
        }
    }

    #[test]
    fn test_non_finite_overflow_clamps_to_max() {
        assert_eq!(plain(100, 10, 2.0).wait_after(u32::MAX), Duration::from_secs(10));
    }

    #[test]
    fn test_full_jitter_bounds() {
        let backoff = Backoff {
            first: Duration::from_millis(1000),
            max: Duration::from_secs(30),
            factor: 1.0,
            jitter: Jitter::Full,
        };
        for attempt in 1..=50 {
            assert!(backoff.wait_after(attempt) <= Duration::from_millis(1000));
        }
    }

    #[test]
    fn test_equal_jitter_bounds() {
        let backoff = Backoff {
            first: Duration::from_millis(1000),
            max: Duration::from_secs(30),
            factor: 1.0,
            jitter: Jitter::Equal,
        };
        for attempt in 1..=50 {
            let wait = backoff.wait_after(attempt);
            assert!(wait >= Duration::from_millis(500));
            assert!(wait <= Duration::from_millis(1000));
        }
    }
}
