use ndarray::{Array2, Array3, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::consts::{
    COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MIN_DIMENSION,
};
use crate::error::{ArtscopeError, Result};

/// One of the three color channels of a [`Raster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; COLOR_CHANNEL_COUNT] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of this channel along the raster's channel axis.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// A decoded RGB artwork image.
///
/// Pixel data is row-major, shape = (height, width, 3), 8-bit intensities
/// in red-green-blue channel order. Construction validates the shape, so
/// every downstream statistic operates on a well-formed buffer and cannot
/// fail. The buffer is immutable once wrapped; one `Raster` describes
/// exactly one image for its whole lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Validate and wrap a pixel array.
    ///
    /// Requires exactly 3 channels and both dimensions >= 2.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        if channels != COLOR_CHANNEL_COUNT {
            return Err(ArtscopeError::InvalidChannelCount { found: channels });
        }
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(ArtscopeError::InvalidDimensions { width, height });
        }
        Ok(Self { data })
    }

    /// Build a raster from a packed row-major RGB byte buffer.
    pub fn from_raw(height: usize, width: usize, pixels: Vec<u8>) -> Result<Self> {
        let len = pixels.len();
        let data = Array3::from_shape_vec((height, width, COLOR_CHANNEL_COUNT), pixels)
            .map_err(|_| ArtscopeError::BufferSizeMismatch { len, width, height })?;
        Self::new(data)
    }

    pub fn width(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    pub fn height(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Borrow the underlying (height, width, 3) pixel array.
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// 2-D view of a single channel plane.
    pub fn channel(&self, channel: Channel) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(2), channel.index())
    }

    /// Derive the luma-weighted grayscale image using ITU-R BT.601 weights,
    /// rounded to the nearest 8-bit level.
    pub fn to_gray(&self) -> Array2<u8> {
        let (h, w, _) = self.data.dim();
        let mut gray = Array2::<u8>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                let r = self.data[[row, col, 0]] as f32;
                let g = self.data[[row, col, 1]] as f32;
                let b = self.data[[row, col, 2]] as f32;
                gray[[row, col]] =
                    (LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b).round() as u8;
            }
        }

        gray
    }
}
