//! Separable Gaussian smoothing for noise suppression.
//!
//! - 5-tap kernel sampled from a Gaussian with sigma ≈ 1.5, normalized to
//!   unit sum, applied as two 1D passes (horizontal then vertical).
//! - Borders are handled by clamping indices (replicate).
//!
//! Complexity: O(W·H) per pass; memory: one intermediate float buffer.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D smoothing filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be symmetric around its centre, but the implementation does not rely
    /// on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP_SIGMA_1_5
    }
}

/// Normalised 5-tap Gaussian sampled at sigma = 1.5.
pub const GAUSSIAN_5TAP_SIGMA_1_5: StaticSeparableFilter = StaticSeparableFilter::new(&[
    0.120_078, 0.233_882, 0.292_081, 0.233_882, 0.120_078,
]);

/// Blur `inp` with the given separable filter, returning a new buffer.
pub fn separable_blur<F: SeparableFilter>(inp: &ImageF32, filter: &F) -> ImageF32 {
    let taps = filter.taps();
    let radius = taps.len() / 2;
    let w = inp.w;
    let h = inp.h;
    let mut tmp = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    // horizontal pass
    for y in 0..h {
        let src = inp.row(y);
        let dst = tmp.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = (x + k).saturating_sub(radius).min(w - 1);
                acc += src[sx] * tap;
            }
            dst[x] = acc;
        }
    }

    // vertical pass
    for y in 0..h {
        let dst = out.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = (y + k).saturating_sub(radius).min(h - 1);
                acc += tmp.get(x, sy) * tap;
            }
            dst[x] = acc;
        }
    }

    out
}

/// Apply the default sigma-1.5 Gaussian used by the edge pipeline.
pub fn gaussian_blur(inp: &ImageF32) -> ImageF32 {
    separable_blur(inp, &GAUSSIAN_5TAP_SIGMA_1_5)
}
