//! Error types used by the batchkit helpers.
//!
//! Each helper surface has its own enum:
//!
//! - [`FileError`] — file, JSON and YAML helpers.
//! - [`HttpError`] — reachability probe and download helpers (`net` feature).
//! - [`VisionError`] — image resize helpers (`vision` feature).
//!
//! The executors themselves define no error type: a batch propagates whatever
//! error the supplied function returns (see [`try_run_threads`](crate::try_run_threads)
//! and [`try_run_tasks`](crate::try_run_tasks)). Contract violations such as a
//! zero worker count panic at call time and are never represented as errors.

use thiserror::Error;

/// Errors produced by the file, JSON and YAML helpers.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FileError {
    /// Underlying filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialize failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse or serialize failure.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors produced by the HTTP helpers.
///
/// Some errors are retryable (transport failures, timeouts, server-side
/// status codes), others are not ([`HttpError::Status`] in the 4xx range).
#[cfg(feature = "net")]
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response arrived with a non-success status code.
    #[error("unexpected status code: {code}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
    },

    /// Failure writing the downloaded body to disk.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "net")]
impl HttpError {
    /// Indicates whether the error type is safe to retry.
    ///
    /// Transport failures and 5xx/429 responses are considered transient;
    /// other status codes (and local i/o failures) are not.
    ///
    /// # Example
    /// ```
    /// use batchkit::HttpError;
    ///
    /// assert!(HttpError::Status { code: 503 }.is_retryable());
    /// assert!(!HttpError::Status { code: 404 }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            HttpError::Request(_) => true,
            HttpError::Status { code } => *code >= 500 || *code == 429,
            HttpError::Io(_) => false,
        }
    }
}

/// Errors produced by the image helpers.
#[cfg(feature = "vision")]
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum VisionError {
    /// Decode, encode or resize failure in the image library.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The decoded image did not have the expected three color channels.
    #[error("unexpected channel count: {found}")]
    UnexpectedChannels {
        /// Number of channels actually found.
        found: u8,
    },
}

#[cfg(all(test, feature = "net"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(HttpError::Status { code: 500 }.is_retryable());
        assert!(HttpError::Status { code: 503 }.is_retryable());
        assert!(HttpError::Status { code: 429 }.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!HttpError::Status { code: 400 }.is_retryable());
        assert!(!HttpError::Status { code: 404 }.is_retryable());
        assert!(!HttpError::Status { code: 410 }.is_retryable());
    }

    #[test]
    fn test_io_is_not_retryable() {
        let err = HttpError::Io(std::io::Error::other("disk full"));
        assert!(!err.is_retryable());
    }
}
