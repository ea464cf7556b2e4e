//! Retry policies.
//!
//! This module groups the knobs that control **how often** a fallible
//! operation is re-attempted and **how long** to wait between attempts.
//!
//! ## Contents
//! - [`RetryPolicy`] attempt budget + suppression entry points
//! - [`Backoff`] how retry waits evolve (first / factor / max + jitter)
//! - [`Jitter`] randomization strategy to avoid thundering herd
//!
//! ## Quick wiring
//! ```text
//! RetryPolicy { max_attempts, backoff: Backoff { first, max, factor, jitter } }
//!      ├─► call / call_sync                 propagate the terminal error
//!      ├─► call_suppressed / *_sync         log at debug, return None
//!      └─► wrap / wrap_sync                 per-item Fn(I) -> Option<O>
//!                                           for run_threads / run_tasks
//! ```
//!
//! ## Defaults
//! - `RetryPolicy::default()` → 5 attempts over `Backoff::default()`.
//! - `Backoff::default()` → first=500ms, factor=2.0, max=20s, jitter=None.
//! - `RetryPolicy::fixed(n, wait)` → the constant-wait degenerate case.

mod backoff;
mod jitter;
mod retry;

pub use backoff::Backoff;
pub use jitter::Jitter;
pub use retry::RetryPolicy;
