//! Image helpers: in-place shorter-edge resize.
//!
//! Enabled via the `vision` feature (on by default).

mod resize;

pub use resize::{resize_to_edge, resize_validated};
