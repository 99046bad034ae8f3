use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::consts::INTENSITY_LEVELS;
use crate::raster::{Channel, Raster};

/// Summary statistics for a single color channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Arithmetic mean intensity, 0-255.
    pub mean: f64,
    /// Population standard deviation of the raw intensities.
    pub std_dev: f64,
    /// Histogram bin with the highest pixel count. Ties go to the lowest
    /// bin index.
    pub dominant_bin: u8,
}

/// Per-channel color statistics of an RGB raster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStats {
    pub red: ChannelStats,
    pub green: ChannelStats,
    pub blue: ChannelStats,
}

impl ColorStats {
    pub fn channel(&self, channel: Channel) -> &ChannelStats {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

/// Compute histogram, mean, and standard deviation for each channel
/// independently.
pub fn color_stats(raster: &Raster) -> ColorStats {
    ColorStats {
        red: channel_stats(raster.channel(Channel::Red)),
        green: channel_stats(raster.channel(Channel::Green)),
        blue: channel_stats(raster.channel(Channel::Blue)),
    }
}

fn channel_stats(values: ArrayView2<'_, u8>) -> ChannelStats {
    let mut histogram = [0u64; INTENSITY_LEVELS];
    for &v in values.iter() {
        histogram[v as usize] += 1;
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    // Linear scan: the first strict maximum wins, so ties break low.
    let mut dominant = 0usize;
    for (bin, &count) in histogram.iter().enumerate() {
        if count > histogram[dominant] {
            dominant = bin;
        }
    }

    ChannelStats {
        mean,
        std_dev: variance.sqrt(),
        dominant_bin: dominant as u8,
    }
}
