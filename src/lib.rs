//! Edge-detection bridge for grayscale camera frames.
//!
//! A frame arrives as a flat byte buffer (one byte per pixel, rows
//! contiguous) together with its width and height; the crate runs a
//! Canny-style pipeline (Gaussian blur → Sobel gradients → non-maximum
//! suppression → double-threshold hysteresis) and returns a binary edge map
//! of identical dimensions, every byte 0 or 255.
//!
//! Two surfaces:
//! - the safe Rust API in [`pipeline`], pure functions with no shared state;
//! - the C ABI in [`ffi`], built as a `cdylib` for managed callers.
//!
//! A frame that cannot be processed (length disagreeing with the stated
//! dimensions) degrades to an identity copy of the input, logged through the
//! `log` facade — the caller's pipeline always receives a same-sized buffer.

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod ffi;
pub mod image;
pub mod pipeline;

// Demo tooling support.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::EdgeDetectionReport;
pub use crate::pipeline::{
    convert_to_grayscale, detect_edges, detect_edges_with_report, process_frame, CannyParams,
    EdgeDetectionResult, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_bridge::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let frame = vec![0u8; w * h];
/// let edges = detect_edges(&frame, w, h, CannyParams::default());
/// assert_eq!(edges.len(), frame.len());
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{detect_edges, process_frame, CannyParams};
}
