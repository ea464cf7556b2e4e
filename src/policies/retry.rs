//! # Bounded retry with optional suppression.
//!
//! [`RetryPolicy`] wraps a fallible operation in a retry loop:
//!
//! - the operation runs up to `max_attempts` times (the first run counts as
//!   attempt 1);
//! - between attempts the policy waits per its [`Backoff`] schedule — the
//!   async variants suspend only the calling task;
//! - any error is retried, without error-type filtering;
//! - on success the value is returned immediately;
//! - once attempts are exhausted, the final error is either propagated
//!   unchanged ([`RetryPolicy::call`], [`RetryPolicy::call_sync`]) or
//!   suppressed into `None` with one `debug`-level log line
//!   ([`RetryPolicy::call_suppressed`], [`RetryPolicy::call_sync_suppressed`]).
//!
//! Intermediate failures log at `trace` only, invisible by default.
//!
//! The policy is a plain value: it is held by copy inside the closures that
//! [`RetryPolicy::wrap`] and [`RetryPolicy::wrap_sync`] return, so retry
//! state never crosses task boundaries and there is no ambient global.
//!
//! ## Composing with the executors
//! ```rust
//! use std::time::Duration;
//! use batchkit::{run_threads, RetryPolicy};
//!
//! let policy = RetryPolicy::fixed(3, Duration::ZERO);
//! let parse = policy.wrap_sync(|s: &str| s.parse::<u32>());
//!
//! let out = run_threads(vec!["4", "x", "16"], parse, 2, false);
//! assert_eq!(out, vec![Some(4), None, Some(16)]);
//! ```

use std::fmt;
use std::future::Future;
use std::thread;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, trace};

use crate::policies::backoff::Backoff;

/// Retry policy: attempt budget plus wait schedule.
///
/// Construct with [`RetryPolicy::new`] for the general exponential case, or
/// [`RetryPolicy::fixed`] for a constant wait between attempts (the
/// degenerate schedule where the minimum and maximum wait coincide).
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    /// Creates a policy that attempts an operation up to `max_attempts` times.
    ///
    /// # Panics
    /// Panics if `max_attempts` is zero.
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be >= 1");
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Creates a policy with a constant wait between attempts.
    pub fn fixed(max_attempts: u32, wait: Duration) -> Self {
        Self::new(max_attempts, Backoff::fixed(wait))
    }

    /// Creates a policy with waits doubling from `first` up to `max`.
    pub fn exponential(max_attempts: u32, first: Duration, max: Duration) -> Self {
        Self::new(
            max_attempts,
            Backoff {
                first,
                max,
                ..Backoff::default()
            },
        )
    }

    /// Returns the attempt budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the wait schedule.
    pub fn backoff(&self) -> &Backoff {
        &self.backoff
    }

    /// Runs `op` until it succeeds or attempts are exhausted, blocking the
    /// current thread during waits.
    ///
    /// The error of the final attempt is returned unchanged.
    pub fn call_sync<O, E, F>(&self, mut op: F) -> Result<O, E>
    where
        F: FnMut() -> Result<O, E>,
        E: fmt::Display,
    {
        let mut attempt: u32 = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    let wait = self.backoff.wait_after(attempt);
                    trace!(attempt, wait_ms = wait.as_millis() as u64, error = %err, "attempt failed, retrying");
                    thread::sleep(wait);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Async variant of [`RetryPolicy::call_sync`]: waits suspend only the
    /// calling task, never the executor's other work.
    pub async fn call<O, E, F, Fut>(&self, mut op: F) -> Result<O, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<O, E>>,
        E: fmt::Display,
    {
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    let wait = self.backoff.wait_after(attempt);
                    trace!(attempt, wait_ms = wait.as_millis() as u64, error = %err, "attempt failed, retrying");
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Like [`RetryPolicy::call_sync`], but a terminal failure is logged once
    /// at `debug` level and converted to `None` instead of propagating.
    pub fn call_sync_suppressed<O, E, F>(&self, op: F) -> Option<O>
    where
        F: FnMut() -> Result<O, E>,
        E: fmt::Display,
    {
        match self.call_sync(op) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(attempts = self.max_attempts, error = %err, "suppressed terminal failure");
                None
            }
        }
    }

    /// Like [`RetryPolicy::call`], but a terminal failure is logged once at
    /// `debug` level and converted to `None` instead of propagating.
    pub async fn call_suppressed<O, E, F, Fut>(&self, op: F) -> Option<O>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<O, E>>,
        E: fmt::Display,
    {
        match self.call(op).await {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(attempts = self.max_attempts, error = %err, "suppressed terminal failure");
                None
            }
        }
    }

    /// Turns a fallible per-item function into one that retries and
    /// suppresses, for composition with the executors.
    ///
    /// The input is cloned per attempt; the policy is held by value inside
    /// the returned closure.
    pub fn wrap_sync<I, O, E, F>(self, func: F) -> impl Fn(I) -> Option<O>
    where
        I: Clone,
        F: Fn(I) -> Result<O, E>,
        E: fmt::Display,
    {
        move |item: I| self.call_sync_suppressed(|| func(item.clone()))
    }

    /// Async counterpart of [`RetryPolicy::wrap_sync`].
    ///
    /// The returned closure produces a boxed future so it can be handed
    /// directly to [`run_tasks`](crate::run_tasks).
    pub fn wrap<I, O, E, F, Fut>(self, func: F) -> impl Fn(I) -> BoxFuture<'static, Option<O>>
    where
        I: Clone + Send + 'static,
        O: Send + 'static,
        E: fmt::Display + Send + 'static,
        F: Fn(I) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        move |item: I| {
            let func = func.clone();
            async move { self.call_suppressed(move || func(item.clone())).await }.boxed()
        }
    }
}

impl Default for RetryPolicy {
    /// Five attempts over the default [`Backoff`] schedule.
    fn default() -> Self {
        Self::new(5, Backoff::default())
    }
}
