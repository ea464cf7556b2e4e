//! In-place image resizing.
//!
//! The resize helpers are the canonical CPU-bound payload for the batch
//! executors: hand [`resize_to_edge`] (or its validating variant) to
//! [`run_threads`](crate::run_threads) or
//! [`run_nested`](crate::run_nested) to shrink a directory of images with
//! bounded parallelism.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::GenericImageView;
use tracing::debug;

use crate::error::VisionError;
use crate::fs::delete;

/// Resizes the image at `path` in place so that its shorter edge equals
/// `edge`, preserving aspect ratio (the longer edge rounds to nearest).
///
/// Returns the path on success; the file is overwritten in its original
/// format (derived from the extension).
///
/// # Panics
/// Panics if `edge` is zero.
pub fn resize_to_edge(path: impl AsRef<Path>, edge: u32) -> Result<PathBuf, VisionError> {
    assert!(edge >= 1, "edge must be >= 1");
    let path = path.as_ref();
    let img = image::open(path)?;
    let (width, height) = img.dimensions();

    let (new_width, new_height) = if width <= height {
        (edge, scaled(height, width, edge))
    } else {
        (scaled(width, height, edge), edge)
    };

    debug!(path = %path.display(), width, height, new_width, new_height, "resizing image");
    let resized = img.resize_exact(new_width, new_height, FilterType::Triangle);
    resized.save(path)?;
    Ok(path.to_path_buf())
}

/// Like [`resize_to_edge`], but first validates that the decoded image has
/// exactly three color channels.
///
/// On an unexpected channel count the file is deleted (best-effort) and
/// [`VisionError::UnexpectedChannels`] is returned, so a batch of downloads
/// never leaves undecodable-for-the-pipeline images behind.
pub fn resize_validated(path: impl AsRef<Path>, edge: u32) -> Result<PathBuf, VisionError> {
    assert!(edge >= 1, "edge must be >= 1");
    let path = path.as_ref();
    let img = image::open(path)?;
    let channels = img.color().channel_count();
    if channels != 3 {
        delete(path);
        return Err(VisionError::UnexpectedChannels { found: channels });
    }
    let (width, height) = img.dimensions();

    let (new_width, new_height) = if width <= height {
        (edge, scaled(height, width, edge))
    } else {
        (scaled(width, height, edge), edge)
    };

    let resized = img.resize_exact(new_width, new_height, FilterType::Triangle);
    resized.save(path)?;
    Ok(path.to_path_buf())
}

/// Longer-edge length after scaling the shorter edge to `edge`.
fn scaled(longer: u32, shorter: u32, edge: u32) -> u32 {
    (edge as f64 * longer as f64 / shorter as f64).round() as u32
}
