//! Double-threshold hysteresis classification of thinned gradients.
//!
//! Pixels at or above the high threshold are accepted outright (strong
//! seeds). Pixels between the two thresholds are weak candidates, accepted
//! only if 8-connected to an accepted pixel; connectivity is resolved with a
//! stack-based flood from the seeds so weak chains attach transitively.
//! Everything below the low threshold is discarded.
//!
//! Output is the final edge map: one byte per pixel, 0 or 255.
use crate::image::ImageF32;

/// Value written for accepted edge pixels.
pub const EDGE_ON: u8 = 255;

/// Classify a thinned magnitude map into a binary edge map.
///
/// `low > high` is not rejected; it simply leaves no weak band, so the
/// result degenerates to a single-threshold map at `high`.
pub fn apply_hysteresis(thinned: &ImageF32, low: f32, high: f32) -> Vec<u8> {
    let w = thinned.w;
    let h = thinned.h;
    let mut edges = vec![0u8; w * h];
    if w == 0 || h == 0 {
        return edges;
    }

    let mag = &thinned.data;
    let mut stack: Vec<usize> = Vec::new();

    // Seed with strong pixels.
    for (idx, &m) in mag.iter().enumerate() {
        if m >= high {
            edges[idx] = EDGE_ON;
            stack.push(idx);
        }
    }

    // Flood into the weak band over the 8-neighborhood.
    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let nidx = ny * w + nx;
                if edges[nidx] == EDGE_ON {
                    continue;
                }
                if mag[nidx] >= low {
                    edges[nidx] = EDGE_ON;
                    stack.push(nidx);
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from(w: usize, h: usize, values: &[f32]) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        img.data.copy_from_slice(values);
        img
    }

    #[test]
    fn strong_pixels_are_kept() {
        let img = map_from(3, 1, &[0.0, 200.0, 0.0]);
        let edges = apply_hysteresis(&img, 50.0, 150.0);
        assert_eq!(edges, vec![0, 255, 0]);
    }

    #[test]
    fn isolated_weak_pixel_is_dropped() {
        let mut img = map_from(3, 3, &[0.0; 9]);
        img.set(1, 1, 100.0);
        let edges = apply_hysteresis(&img, 50.0, 150.0);
        assert!(edges.iter().all(|&b| b == 0));
    }

    #[test]
    fn weak_chain_connected_to_strong_is_kept() {
        // strong - weak - weak along one row; the far weak pixel joins
        // through its neighbor, not through the seed directly.
        let img = map_from(4, 1, &[200.0, 100.0, 100.0, 10.0]);
        let edges = apply_hysteresis(&img, 50.0, 150.0);
        assert_eq!(edges, vec![255, 255, 255, 0]);
    }

    #[test]
    fn diagonal_weak_neighbor_is_kept() {
        let mut img = ImageF32::new(3, 3);
        img.set(0, 0, 200.0);
        img.set(1, 1, 100.0);
        let edges = apply_hysteresis(&img, 50.0, 150.0);
        assert_eq!(edges[0], 255);
        assert_eq!(edges[4], 255);
    }
}
