//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the local edge direction is quantized into one of four
//! sectors (0°, 45°, 90°, 135°) from the signs and ratio of `gx`/`gy`; the
//! pixel keeps its magnitude only if it is at least its leading neighbor and
//! strictly greater than its trailing neighbor along that direction, thinning
//! candidate edges to single-pixel width. The asymmetric comparison breaks
//! ties on symmetric step profiles, where both flanks of the edge carry equal
//! magnitude and a strict test on both sides would erase the edge entirely.
//!
//! Border handling: gradient computation clamps indices, and NMS ignores the
//! outermost 1-pixel frame to avoid out-of-bounds checks in neighbor lookup.
//! The output is a dense map (suppressed pixels are 0) so the hysteresis
//! stage can do per-pixel lookups.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::pipeline::grad::Grad;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Suppress non-maximal gradient responses, returning a thinned magnitude map.
pub fn suppress_non_maxima(grad: &Grad) -> ImageF32 {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag == 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag >= neighbor1 && mag > neighbor2 {
                out_row[x] = mag;
            }
        }
    }

    out
}
