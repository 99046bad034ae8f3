use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::config::EdgeDetectionConfig;

/// Structural statistics of a grayscale image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    /// Fraction of pixels marked as edges, in [0, 1].
    pub edge_density: f64,
    /// Mean absolute difference between the left half and the mirrored
    /// right half, in intensity units 0-255. Lower is more symmetric.
    pub symmetry_score: f64,
}

/// Compute edge density and left-right symmetry of a grayscale image.
pub fn composition_stats(gray: &Array2<u8>, config: &EdgeDetectionConfig) -> CompositionStats {
    let mask = edge_mask(gray, config);
    let edge_pixels = mask.iter().filter(|&&edge| edge).count();

    CompositionStats {
        edge_density: edge_pixels as f64 / mask.len() as f64,
        symmetry_score: symmetry_score(gray),
    }
}

/// Binary edge mask via Sobel gradients with two-threshold hysteresis.
///
/// Gradient magnitude is the L1 norm |Gx| + |Gy| of the 3x3 Sobel kernels.
/// After non-maximum suppression along the quantized gradient direction,
/// pixels at or above `high_threshold` seed edges and pixels at or above
/// `low_threshold` join one only when 8-connected to a seed. The 1-pixel
/// border carries no gradient and is never marked; images smaller than 3x3
/// yield an empty mask.
pub fn edge_mask(gray: &Array2<u8>, config: &EdgeDetectionConfig) -> Array2<bool> {
    let (h, w) = gray.dim();
    let mut mask = Array2::from_elem((h, w), false);
    if h < 3 || w < 3 {
        return mask;
    }

    let mut magnitude = Array2::<f64>::zeros((h, w));
    let mut sector = Array2::<u8>::zeros((h, w));

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let gx = -(gray[[row - 1, col - 1]] as f64) + gray[[row - 1, col + 1]] as f64
                - 2.0 * gray[[row, col - 1]] as f64
                + 2.0 * gray[[row, col + 1]] as f64
                - gray[[row + 1, col - 1]] as f64
                + gray[[row + 1, col + 1]] as f64;

            let gy = -(gray[[row - 1, col - 1]] as f64)
                - 2.0 * gray[[row - 1, col]] as f64
                - gray[[row - 1, col + 1]] as f64
                + gray[[row + 1, col - 1]] as f64
                + 2.0 * gray[[row + 1, col]] as f64
                + gray[[row + 1, col + 1]] as f64;

            magnitude[[row, col]] = gx.abs() + gy.abs();
            sector[[row, col]] = direction_sector(gx, gy);
        }
    }

    // Non-maximum suppression: keep only pixels that are local maxima
    // along their gradient direction.
    let mut thinned = Array2::from_elem((h, w), false);
    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let mag = magnitude[[row, col]];
            if mag < config.low_threshold {
                continue;
            }
            let (ahead, behind) = match sector[[row, col]] {
                0 => ((row, col + 1), (row, col - 1)),
                1 => ((row - 1, col + 1), (row + 1, col - 1)),
                2 => ((row - 1, col), (row + 1, col)),
                _ => ((row - 1, col - 1), (row + 1, col + 1)),
            };
            if mag >= magnitude[ahead] && mag >= magnitude[behind] {
                thinned[[row, col]] = true;
            }
        }
    }

    // Hysteresis: flood from strong pixels through connected weak ones.
    let mut stack = Vec::new();
    for row in 1..h - 1 {
        for col in 1..w - 1 {
            if thinned[[row, col]]
                && magnitude[[row, col]] >= config.high_threshold
                && !mask[[row, col]]
            {
                mask[[row, col]] = true;
                stack.push((row, col));
                while let Some((r, c)) = stack.pop() {
                    for nr in r.saturating_sub(1)..=(r + 1).min(h - 1) {
                        for nc in c.saturating_sub(1)..=(c + 1).min(w - 1) {
                            if thinned[[nr, nc]] && !mask[[nr, nc]] {
                                mask[[nr, nc]] = true;
                                stack.push((nr, nc));
                            }
                        }
                    }
                }
            }
        }
    }

    mask
}

/// Quantize a gradient vector into one of 4 direction sectors:
/// 0 = horizontal, 1 = 45 degrees, 2 = vertical, 3 = 135 degrees.
fn direction_sector(gx: f64, gy: f64) -> u8 {
    let mut angle = gy.atan2(gx).to_degrees();
    if angle < 0.0 {
        angle += 180.0;
    }
    if !(22.5..157.5).contains(&angle) {
        0
    } else if angle < 67.5 {
        1
    } else if angle < 112.5 {
        2
    } else {
        3
    }
}

/// Mean absolute difference between the left half and the horizontally
/// mirrored right half, about the vertical midline.
///
/// Both halves span width/2 columns; odd widths drop the center column.
/// Exactly mirror-symmetric images score 0.
pub fn symmetry_score(gray: &Array2<u8>) -> f64 {
    let (h, w) = gray.dim();
    let mid = w / 2;

    let mut sum = 0.0f64;
    for row in 0..h {
        for col in 0..mid {
            let left = gray[[row, col]] as f64;
            let right = gray[[row, w - 1 - col]] as f64;
            sum += (left - right).abs();
        }
    }

    sum / (h * mid) as f64
}
