//! Streaming file download.
//!
//! The download helpers are the canonical I/O-bound payload for the batch
//! executors: compose them with a suppressing
//! [`RetryPolicy`](crate::RetryPolicy) and hand the wrapped function to
//! [`run_tasks`](crate::run_tasks) to fetch a batch of URLs with bounded
//! concurrency, getting `None` for the URLs that stayed unreachable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::HttpError;
use crate::fs::sha256_hex;

/// One downloadable resource: its URL and the extension the stored file
/// should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    /// Source URL.
    pub url: String,
    /// File extension for the stored copy, without the leading dot.
    pub ext: String,
}

impl DownloadItem {
    /// Creates a new download item.
    pub fn new(url: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ext: ext.into(),
        }
    }
}

/// Downloads `url` to `path`, streaming the body to disk.
///
/// The response status must be 2xx; anything else is [`HttpError::Status`].
/// `timeout` bounds the whole request including body transfer. On success
/// the final path is returned.
pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    path: impl AsRef<Path>,
    timeout: Duration,
) -> Result<PathBuf, HttpError> {
    let path = path.as_ref();
    let response = client.get(url).timeout(timeout).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::Status {
            code: status.as_u16(),
        });
    }

    let mut file = tokio::fs::File::create(path).await?;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(path.to_path_buf())
}

/// Downloads an item into `dir`, naming the file by the SHA-256 digest of
/// its URL plus the item's extension.
pub async fn download_to_dir(
    client: &reqwest::Client,
    item: &DownloadItem,
    dir: impl AsRef<Path>,
    timeout: Duration,
) -> Result<PathBuf, HttpError> {
    let path = target_path(item, dir.as_ref());
    download_file(client, &item.url, &path, timeout).await
}

/// Digest-derived storage path for an item inside `dir`.
fn target_path(item: &DownloadItem, dir: &Path) -> PathBuf {
    dir.join(format!("{}.{}", sha256_hex(item.url.as_bytes()), item.ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_is_digest_named() {
        let item = DownloadItem::new("https://example.com/a.jpg", "jpg");
        let path = target_path(&item, Path::new("/tmp/downloads"));
        let name = path.file_name().unwrap().to_str().unwrap();
        let (stem, ext) = name.split_once('.').unwrap();
        assert_eq!(ext, "jpg");
        assert_eq!(stem.len(), 64);
        assert_eq!(stem, sha256_hex(item.url.as_bytes()));
    }

    #[test]
    fn test_same_url_maps_to_same_path() {
        let dir = Path::new("/data");
        let a = target_path(&DownloadItem::new("https://host/x", "png"), dir);
        let b = target_path(&DownloadItem::new("https://host/x", "png"), dir);
        let c = target_path(&DownloadItem::new("https://host/y", "png"), dir);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
