//! TIFF container metadata types

/// Directory fields retrieved from a tagged-image container, after
/// validation against the supported subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiffContainerInfo {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Samples per pixel; only 3 (interleaved RGB) is accepted
    pub samples_per_pixel: u16,
    /// Bits per sample; only 16 is accepted
    pub bits_per_sample: u16,
}
