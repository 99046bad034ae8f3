use std::path::Path;

use image::{ColorType, GrayImage, ImageFormat, ImageReader, Luma};
use ndarray::{Array2, Array3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::Result;
use crate::raster::Raster;

/// Metadata about a decodable image file.
#[derive(Clone, Debug)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
    pub format: Option<ImageFormat>,
}

/// Decode a file and report its metadata without building a raster.
pub fn probe_image(path: &Path) -> Result<ImageInfo> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    Ok(ImageInfo {
        width: img.width(),
        height: img.height(),
        color_type: img.color(),
        format,
    })
}

/// Decode an image file into a validated RGB raster.
///
/// Accepts any format the `image` crate can read; grayscale and alpha
/// sources are converted to 8-bit RGB before validation.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut data = Array3::<u8>::zeros((h as usize, w as usize, COLOR_CHANNEL_COUNT));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = rgb.get_pixel(col as u32, row as u32);
            data[[row, col, 0]] = pixel.0[0];
            data[[row, col, 1]] = pixel.0[1];
            data[[row, col, 2]] = pixel.0[2];
        }
    }

    Raster::new(data)
}

/// Save a binary edge mask as an 8-bit grayscale PNG, edges white.
pub fn save_mask_png(mask: &Array2<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if mask[[row, col]] { 255 } else { 0 };
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
