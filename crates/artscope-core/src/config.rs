use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EDGE_HIGH, DEFAULT_EDGE_LOW};

/// Tunable parameters for one extraction run.
///
/// The defaults reproduce the reference calibration; a hosting application
/// that overrides them must keep using the same values for every call so
/// the metrics stay comparable across images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub edges: EdgeDetectionConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            edges: EdgeDetectionConfig::default(),
        }
    }
}

/// Hysteresis thresholds for the edge detector, on the L1 Sobel gradient
/// scale of an 8-bit image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeDetectionConfig {
    /// Gradient magnitude at which a pixel may join an existing edge.
    pub low_threshold: f64,
    /// Gradient magnitude at which a pixel seeds an edge on its own.
    pub high_threshold: f64,
}

impl Default for EdgeDetectionConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_EDGE_LOW,
            high_threshold: DEFAULT_EDGE_HIGH,
        }
    }
}
