//! PPM container types

/// Framing information parsed from a binary PPM header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmHeader {
    /// Two-character magic token, e.g. "P6"
    pub format_tag: String,
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Declared per-channel maximum sample value
    pub max_sample_value: u32,
}

/// A fully decoded PPM frame: the validated header plus all samples in
/// row-major order, red, green, blue per pixel, native endianness.
#[derive(Debug, Clone)]
pub struct PpmImage {
    pub header: PpmHeader,
    pub samples: Vec<u16>,
}
