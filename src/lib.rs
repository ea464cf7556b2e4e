//! # batchkit
//!
//! **Batchkit** is a small utility library for running a function over a
//! collection of inputs with bounded parallelism, wrapping fallible
//! operations in retry/backoff policies, and dispatching the usual batch
//! payloads (file downloads, image resizing, document I/O).
//!
//! ## Architecture
//! ```text
//!            items: Vec<Input>          func: Fn(Input) -> Output
//!                  │                            │
//!                  │        RetryPolicy::wrap / wrap_sync (optional)
//!                  │                            │
//!                  ▼                            ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Bounded executor (pick one)                                  │
//! │   - run_threads   OS threads, preemptive, blocking work       │
//! │   - run_tasks     tokio tasks behind a semaphore admission    │
//! │                   gate, suspending I/O work                   │
//! │   - run_nested    chunked(items) → outer thread pool, inner   │
//! │                   thread pool per chunk                       │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//!                 Vec<Output> — always in input order,
//!                 whatever the completion order was
//! ```
//!
//! Retry is orthogonal to execution: a [`RetryPolicy`] wraps the function
//! *before* it reaches an executor, so backoff state stays local to each
//! item and never crosses task boundaries. Executors themselves never retry
//! and never swallow errors — the `try_run_*` variants fail the whole batch,
//! and per-item partial failure is expressed by suppression (`Option<O>`).
//!
//! ## Features
//! | Area           | Description                                            | Key items                                  |
//! |----------------|--------------------------------------------------------|--------------------------------------------|
//! | **Executors**  | Fixed-parallelism map, ordered results.                | [`run_threads`], [`run_tasks`], [`run_nested`] |
//! | **Retry**      | Bounded attempts, exponential backoff, suppression.    | [`RetryPolicy`], [`Backoff`], [`Jitter`]   |
//! | **Chunking**   | Lazy fixed-size grouping of ordered input.             | [`chunked`]                                |
//! | **Files**      | JSON/YAML/JSONL load+dump, delete, SHA-256 digests.    | [`load_json`], [`dump_jsonl`], [`sha256_file`] |
//! | **Config**     | Explicit YAML-loaded configuration value.              | [`Config`], [`RequestConfig`]              |
//!
//! ## Optional features
//! - `net` *(default)*: URL probe and streaming download ([`check_url`],
//!   [`download_file`]).
//! - `vision` *(default)*: in-place image resizing ([`resize_to_edge`],
//!   [`resize_validated`]).
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use batchkit::{run_threads, RetryPolicy};
//!
//! // A flaky per-item operation...
//! fn classify(word: &str) -> Result<usize, String> {
//!     if word.starts_with('x') {
//!         Err(format!("unclassifiable: {word}"))
//!     } else {
//!         Ok(word.len())
//!     }
//! }
//!
//! // ...retried and suppressed per item, fanned out over 4 workers.
//! let policy = RetryPolicy::fixed(3, Duration::ZERO);
//! let lengths = run_threads(
//!     vec!["alpha", "xi", "gamma"],
//!     policy.wrap_sync(classify),
//!     4,
//!     false,
//! );
//! assert_eq!(lengths, vec![Some(5), None, Some(5)]);
//! ```

mod config;
mod error;
mod exec;
mod fs;
mod policies;

// ---- Public re-exports ----

pub use config::{Config, RequestConfig};
pub use error::FileError;
pub use exec::{chunked, run_nested, run_tasks, run_threads, try_run_tasks, try_run_threads, Chunked};
pub use fs::{
    delete, dump_json, dump_jsonl, dump_yaml, load_json, load_jsonl, load_yaml, sha256_file,
    sha256_hex,
};
pub use policies::{Backoff, Jitter, RetryPolicy};

// Optional: HTTP probe and streaming download helpers.
// Enable with: `--features net` (on by default).
#[cfg(feature = "net")]
mod net;
#[cfg(feature = "net")]
pub use error::HttpError;
#[cfg(feature = "net")]
pub use net::{check_url, download_file, download_to_dir, DownloadItem};

// Optional: in-place image resize helpers.
// Enable with: `--features vision` (on by default).
#[cfg(feature = "vision")]
mod vision;
#[cfg(feature = "vision")]
pub use error::VisionError;
#[cfg(feature = "vision")]
pub use vision::{resize_to_edge, resize_validated};
