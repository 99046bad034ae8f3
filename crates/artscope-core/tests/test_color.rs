mod common;

use approx::assert_relative_eq;
use ndarray::Array3;

use artscope_core::raster::{Channel, Raster};
use artscope_core::stats::color::color_stats;
use common::{solid_raster, split_raster};

#[test]
fn test_uniform_image_stats() {
    let raster = solid_raster(8, 8, [40, 120, 200]);
    let stats = color_stats(&raster);

    assert_relative_eq!(stats.red.mean, 40.0);
    assert_relative_eq!(stats.green.mean, 120.0);
    assert_relative_eq!(stats.blue.mean, 200.0);

    for channel in Channel::ALL {
        assert_relative_eq!(stats.channel(channel).std_dev, 0.0);
    }

    assert_eq!(stats.red.dominant_bin, 40);
    assert_eq!(stats.green.dominant_bin, 120);
    assert_eq!(stats.blue.dominant_bin, 200);
}

#[test]
fn test_half_split_mean_and_std() {
    // Left half pure red, right half pure blue: both channels average to
    // 127.5 over the full width, with std 127.5.
    let raster = split_raster(4, 4, [255, 0, 0], [0, 0, 255]);
    let stats = color_stats(&raster);

    assert_relative_eq!(stats.red.mean, 127.5);
    assert_relative_eq!(stats.blue.mean, 127.5);
    assert_relative_eq!(stats.green.mean, 0.0);

    assert_relative_eq!(stats.red.std_dev, 127.5);
    assert_relative_eq!(stats.blue.std_dev, 127.5);
    assert_relative_eq!(stats.green.std_dev, 0.0);
}

#[test]
fn test_dominant_bin_tie_breaks_low() {
    // Equal counts of 10 and 200: the lower bin must win.
    let raster = split_raster(4, 4, [10, 10, 10], [200, 200, 200]);
    let stats = color_stats(&raster);

    for channel in Channel::ALL {
        assert_eq!(stats.channel(channel).dominant_bin, 10);
    }
}

#[test]
fn test_dominant_bin_majority_wins() {
    // 3 columns of 50 against 1 column of 250
    let data = Array3::from_shape_fn((4, 4, 3), |(_, col, _)| if col < 3 { 50 } else { 250 });
    let stats = color_stats(&Raster::new(data).unwrap());
    assert_eq!(stats.red.dominant_bin, 50);
}

#[test]
fn test_stats_stay_in_intensity_range() {
    let data = Array3::from_shape_fn((16, 16, 3), |(row, col, c)| {
        ((row * 31 + col * 17 + c * 77) % 256) as u8
    });
    let stats = color_stats(&Raster::new(data).unwrap());

    for channel in Channel::ALL {
        let ch = stats.channel(channel);
        assert!((0.0..=255.0).contains(&ch.mean));
        assert!((0.0..=255.0).contains(&ch.std_dev));
    }
}
