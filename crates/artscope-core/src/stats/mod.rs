pub mod color;
pub mod composition;
pub mod texture;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::raster::Raster;

use self::color::ColorStats;
use self::composition::CompositionStats;
use self::texture::TextureStats;

/// All statistic groups extracted from one artwork image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub color: ColorStats,
    pub texture: TextureStats,
    pub composition: CompositionStats,
}

/// Run all three statistic groups with the default configuration.
pub fn extract_features(raster: &Raster) -> FeatureSet {
    extract_features_with(raster, &ExtractorConfig::default())
}

/// Run all three statistic groups.
///
/// The grayscale derivative is computed once and shared by the texture and
/// composition passes. Pure function of the pixel buffer: repeated calls on
/// the same raster return bit-identical results.
pub fn extract_features_with(raster: &Raster, config: &ExtractorConfig) -> FeatureSet {
    debug!(
        width = raster.width(),
        height = raster.height(),
        "extracting features"
    );

    let color = color::color_stats(raster);
    let gray = raster.to_gray();
    let texture = texture::texture_stats(&gray);
    let composition = composition::composition_stats(&gray, &config.edges);

    FeatureSet {
        color,
        texture,
        composition,
    }
}

/// Extract features from many images in parallel.
///
/// Output order matches input order. Extractions share no state, so each
/// image is processed on its own worker independently.
pub fn extract_batch(rasters: &[Raster], config: &ExtractorConfig) -> Vec<FeatureSet> {
    rasters
        .par_iter()
        .map(|raster| extract_features_with(raster, config))
        .collect()
}

/// Extract features from many images with per-image progress reporting.
///
/// Calls `on_progress(items_done)` as each image completes.
pub fn extract_batch_with_progress(
    rasters: &[Raster],
    config: &ExtractorConfig,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Vec<FeatureSet> {
    let done = AtomicUsize::new(0);
    rasters
        .par_iter()
        .map(|raster| {
            let features = extract_features_with(raster, config);
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);
            features
        })
        .collect()
}
