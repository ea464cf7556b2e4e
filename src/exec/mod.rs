//! Bounded batch executors.
//!
//! Every executor maps a function over a batch with a fixed concurrency
//! ceiling and returns results **in input order**, whatever the completion
//! order. The worker model is chosen by function:
//!
//! - [`run_threads`] / [`try_run_threads`] — preemptive OS threads; blocking
//!   I/O and CPU-bound work.
//! - [`run_tasks`] / [`try_run_tasks`] — cooperative tokio tasks behind a
//!   counting-semaphore admission gate; suspending I/O-bound work.
//! - [`run_nested`] — two thread pools composed over [`chunked`] groups.
//!
//! Executors never retry and never catch the mapped function's errors on the
//! caller's behalf: compose a [`RetryPolicy`](crate::RetryPolicy) around the
//! function for per-item retry/suppression, or use the `try_` variants to
//! fail the batch as a whole.
//!
//! All entities here live for one call only; workers are joined (or aborted,
//! for a dropped async batch) before control returns.

mod chunk;
mod nested;
mod progress;
mod task;
mod thread;

pub use chunk::{chunked, Chunked};
pub use nested::run_nested;
pub use task::{run_tasks, try_run_tasks};
pub use thread::{run_threads, try_run_threads};
