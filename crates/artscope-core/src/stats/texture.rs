use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::INTENSITY_LEVELS;

/// Texture descriptors derived from the gray-level co-occurrence matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureStats {
    /// Sum of P(i,j) * (i-j)^2 — local intensity variation.
    pub contrast: f64,
    /// Sum of P(i,j) / (1 + |i-j|) — closeness to the diagonal, in (0, 1].
    pub homogeneity: f64,
    /// sqrt of the sum of P(i,j)^2 — uniformity, in (0, 1].
    pub energy: f64,
}

/// Summarize the one-pixel-right co-occurrence matrix of a grayscale image.
///
/// An image with a single gray value puts the entire mass on the diagonal:
/// contrast 0, homogeneity 1, energy 1.
pub fn texture_stats(gray: &Array2<u8>) -> TextureStats {
    let glcm = cooccurrence_matrix(gray);

    let mut contrast = 0.0;
    let mut homogeneity = 0.0;
    let mut energy_sq = 0.0;

    for ((i, j), &p) in glcm.indexed_iter() {
        if p == 0.0 {
            continue;
        }
        let diff = i as f64 - j as f64;
        contrast += p * diff * diff;
        homogeneity += p / (1.0 + diff.abs());
        energy_sq += p * p;
    }

    TextureStats {
        contrast,
        homogeneity,
        energy: energy_sq.sqrt(),
    }
}

/// Joint probability distribution of horizontally adjacent gray-level pairs.
///
/// For every pixel with a right neighbor, the pair (gray[y,x], gray[y,x+1])
/// is counted at spatial offset (0, +1). The matrix is symmetrized by also
/// counting the reversed pair, then normalized to sum 1.
pub fn cooccurrence_matrix(gray: &Array2<u8>) -> Array2<f64> {
    let (h, w) = gray.dim();
    let mut counts = Array2::<f64>::zeros((INTENSITY_LEVELS, INTENSITY_LEVELS));

    for row in 0..h {
        for col in 0..w - 1 {
            let a = gray[[row, col]] as usize;
            let b = gray[[row, col + 1]] as usize;
            counts[[a, b]] += 1.0;
            counts[[b, a]] += 1.0;
        }
    }

    // One pair per pixel with a right neighbor, counted twice. Width >= 2
    // is guaranteed at raster construction, so the total is never zero.
    let total = (2 * h * (w - 1)) as f64;
    counts.mapv_into(|c| c / total)
}
