//! HTTP helpers: reachability probe and streaming download.
//!
//! Enabled via the `net` feature (on by default). Timeouts are per call —
//! the executors deliberately have no timeout parameter of their own.

mod download;
mod request;

pub use download::{download_file, download_to_dir, DownloadItem};
pub use request::check_url;
