//! The pixel pipeline: grayscale frame in, binary edge map out.
//!
//! Stages, in order:
//! 1. convert the 8-bit frame to float on the 0–255 scale;
//! 2. separable 5-tap Gaussian blur (sigma ≈ 1.5) for noise suppression;
//! 3. Sobel gradients (gx, gy, magnitude);
//! 4. direction-aligned non-maximum suppression;
//! 5. double-threshold hysteresis with 8-connectivity.
//!
//! Every entry point is a pure free function over caller-owned slices: no
//! shared state, no allocation that outlives the call, safe to invoke from
//! independent threads. Gradient magnitudes stay on the 0–255 intensity
//! scale so the default thresholds (50, 150) keep their conventional
//! meaning.
//!
//! Error policy: a frame whose length disagrees with `width × height` (or a
//! zero dimension) never panics and never yields a wrong-sized buffer — the
//! run is logged and degrades to an identity copy of the input.
pub mod blur;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use blur::{gaussian_blur, separable_blur, SeparableFilter, GAUSSIAN_5TAP_SIGMA_1_5};
pub use grad::{sobel_gradients, Grad};
pub use hysteresis::{apply_hysteresis, EDGE_ON};
pub use nms::suppress_non_maxima;

use crate::diagnostics::{EdgeDetectionReport, TimingBreakdown};
use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};
use log::{error, info};
use std::time::Instant;

/// Default low hysteresis threshold.
pub const DEFAULT_LOW_THRESHOLD: f32 = 50.0;
/// Default high hysteresis threshold.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 150.0;

/// Hysteresis thresholds for the edge detector.
///
/// `low <= high` by convention; the pipeline does not enforce it (a crossed
/// pair simply leaves no weak band).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CannyParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl CannyParams {
    pub fn new(low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }
}

/// Edge map plus the run report.
#[derive(Clone, Debug)]
pub struct EdgeDetectionResult {
    /// Binary edge map, same length as the input, every byte 0 or 255.
    pub edges: Vec<u8>,
    pub report: EdgeDetectionReport,
}

/// Run the full edge-detection pipeline, returning the edge map and a
/// stage-by-stage report.
pub fn detect_edges_with_report(
    input: &[u8],
    width: usize,
    height: usize,
    params: CannyParams,
) -> EdgeDetectionResult {
    let total_start = Instant::now();
    let mut timing = TimingBreakdown::default();

    if let Err(msg) = validate_frame(input, width, height) {
        error!("edge detection failed: {msg}; returning input unchanged");
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        return EdgeDetectionResult {
            edges: input.to_vec(),
            report: EdgeDetectionReport {
                width,
                height,
                low_threshold: params.low_threshold,
                high_threshold: params.high_threshold,
                edge_count: 0,
                degraded: true,
                timing,
            },
        };
    }

    let frame = ImageU8::from_packed(input, width, height);
    let l0 = frame_to_f32(&frame);

    let blur_start = Instant::now();
    let smoothed = gaussian_blur(&l0);
    timing.push("blur", blur_start.elapsed().as_secs_f64() * 1000.0);

    let grad_start = Instant::now();
    let grad = sobel_gradients(&smoothed);
    timing.push("gradient", grad_start.elapsed().as_secs_f64() * 1000.0);

    let nms_start = Instant::now();
    let thinned = suppress_non_maxima(&grad);
    timing.push("nms", nms_start.elapsed().as_secs_f64() * 1000.0);

    let hyst_start = Instant::now();
    let edges = apply_hysteresis(&thinned, params.low_threshold, params.high_threshold);
    timing.push("hysteresis", hyst_start.elapsed().as_secs_f64() * 1000.0);

    timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    let edge_count = edges.iter().filter(|&&b| b == EDGE_ON).count();

    EdgeDetectionResult {
        edges,
        report: EdgeDetectionReport {
            width,
            height,
            low_threshold: params.low_threshold,
            high_threshold: params.high_threshold,
            edge_count,
            degraded: false,
            timing,
        },
    }
}

/// Run the edge detector and return just the edge map.
pub fn detect_edges(input: &[u8], width: usize, height: usize, params: CannyParams) -> Vec<u8> {
    detect_edges_with_report(input, width, height, params).edges
}

/// Per-frame entry point with the default thresholds.
pub fn process_frame(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    let result = detect_edges_with_report(input, width, height, CannyParams::default());
    if !result.report.degraded {
        info!("processed frame: {width}x{height}");
    }
    result.edges
}

/// Grayscale conversion entry point.
///
/// Camera frames arrive single-channel already, so the contract is identity:
/// the returned buffer is a copy of the input. Multi-channel input is
/// unsupported.
pub fn convert_to_grayscale(input: &[u8], _width: usize, _height: usize) -> Vec<u8> {
    input.to_vec()
}

fn validate_frame(input: &[u8], width: usize, height: usize) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("invalid dimensions {width}x{height}"));
    }
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| format!("dimensions {width}x{height} overflow"))?;
    if input.len() != expected {
        return Err(format!(
            "buffer length {} does not match {width}x{height} = {expected}",
            input.len()
        ));
    }
    Ok(())
}

fn frame_to_f32(frame: &ImageU8<'_>) -> ImageF32 {
    let mut out = ImageF32::new(frame.w, frame.h);
    for y in 0..frame.h {
        let src = frame.row(y);
        let dst = out.row_mut(y);
        for x in 0..frame.w {
            dst[x] = src[x] as f32;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_length_degrades_to_passthrough() {
        let input = vec![7u8; 10];
        let result = detect_edges_with_report(&input, 4, 4, CannyParams::default());
        assert!(result.report.degraded);
        assert_eq!(result.edges, input);
    }

    #[test]
    fn zero_dimension_degrades_to_passthrough() {
        let input = vec![7u8; 0];
        let result = detect_edges_with_report(&input, 0, 4, CannyParams::default());
        assert!(result.report.degraded);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn report_counts_edges() {
        let mut input = vec![0u8; 16 * 16];
        for y in 0..16 {
            for x in 8..16 {
                input[y * 16 + x] = 255;
            }
        }
        let result = detect_edges_with_report(&input, 16, 16, CannyParams::default());
        let on = result.edges.iter().filter(|&&b| b == 255).count();
        assert_eq!(result.report.edge_count, on);
        assert!(on > 0);
    }
}
