use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image: expected 3 channels, found {found}")]
    InvalidChannelCount { found: usize },

    #[error("Invalid image dimensions: {width}x{height} (minimum is 2x2)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Pixel buffer length {len} does not match {width}x{height}x3")]
    BufferSizeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ArtscopeError>;
