/// Number of distinct intensity values in an 8-bit channel, and therefore
/// the number of histogram bins and co-occurrence matrix levels.
pub const INTENSITY_LEVELS: usize = 256;

/// Number of channels in an RGB raster (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Minimum raster width/height. The symmetry score needs at least two
/// columns, the co-occurrence matrix at least one horizontal pixel pair.
pub const MIN_DIMENSION: usize = 2;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Default lower hysteresis threshold for the edge detector, on the L1
/// Sobel gradient scale of an 8-bit image.
pub const DEFAULT_EDGE_LOW: f64 = 100.0;

/// Default upper hysteresis threshold for the edge detector.
pub const DEFAULT_EDGE_HIGH: f64 = 200.0;
