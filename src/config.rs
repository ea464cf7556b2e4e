//! # Explicit configuration values.
//!
//! [`Config`] bundles the request-related defaults (timeout, retry budget,
//! wait bounds, suppression) as a plain value loaded from a YAML file. It is
//! handed explicitly to the call sites that want it — there is no ambient
//! process-wide singleton.
//!
//! # Example
//! ```rust
//! use batchkit::Config;
//!
//! // A missing file yields the built-in defaults.
//! let cfg = Config::load("/definitely/not/here.yaml").unwrap();
//! assert_eq!(cfg.request.retries_count, 5);
//!
//! let policy = cfg.retry_policy();
//! assert_eq!(policy.max_attempts(), 5);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FileError;
use crate::fs::load_yaml;
use crate::policies::{Backoff, Jitter, RetryPolicy};

/// Request-related defaults.
///
/// `retry_min_wait_ms == retry_max_wait_ms` would degenerate the derived
/// backoff to a fixed wait; the defaults keep them apart so the schedule
/// actually grows.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Per-request timeout, seconds.
    pub timeout_secs: u64,
    /// Attempt budget for retried requests.
    pub retries_count: u32,
    /// Wait after the first failed attempt, milliseconds.
    pub retry_min_wait_ms: u64,
    /// Maximum wait between attempts, milliseconds.
    pub retry_max_wait_ms: u64,
    /// Whether terminal request failures should be suppressed into `None`
    /// (with a `debug` log line) instead of propagated.
    pub suppress_error: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            retries_count: 5,
            retry_min_wait_ms: 500,
            retry_max_wait_ms: 20_000,
            suppress_error: true,
        }
    }
}

/// Library configuration, loaded from YAML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Request-related defaults.
    pub request: RequestConfig,
}

impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// A missing file yields [`Config::default`]; a malformed file is a
    /// [`FileError`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        load_yaml(path)
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request.timeout_secs)
    }

    /// Derives a [`RetryPolicy`] from the request section: waits double from
    /// the configured minimum up to the configured maximum.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.request.retries_count,
            Backoff {
                first: Duration::from_millis(self.request.retry_min_wait_ms),
                max: Duration::from_millis(self.request.retry_max_wait_ms),
                factor: 2.0,
                jitter: Jitter::None,
            },
        )
    }
}
