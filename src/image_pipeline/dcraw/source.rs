use std::io::Read;
use std::path::Path;

use crate::image_pipeline::common::error::Result;

/// Provider of raw-decoded byte streams.
///
/// An implementation yields a stream in the 16-bit binary PPM wire
/// layout for the given camera raw file. Any deviation from that layout
/// is handled downstream as a format error, not here.
pub trait RawByteSource {
    fn open(&self, input: &Path) -> Result<Box<dyn Read>>;
}
