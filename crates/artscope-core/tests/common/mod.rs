use ndarray::Array3;

use artscope_core::raster::Raster;

/// Solid-color raster: every pixel is `rgb`.
pub fn solid_raster(h: usize, w: usize, rgb: [u8; 3]) -> Raster {
    let data = Array3::from_shape_fn((h, w, 3), |(_, _, c)| rgb[c]);
    Raster::new(data).expect("valid raster")
}

/// Raster whose left half is `left` and right half is `right`, split at
/// the vertical midline.
pub fn split_raster(h: usize, w: usize, left: [u8; 3], right: [u8; 3]) -> Raster {
    let data = Array3::from_shape_fn((h, w, 3), |(_, col, c)| {
        if col < w / 2 {
            left[c]
        } else {
            right[c]
        }
    });
    Raster::new(data).expect("valid raster")
}
