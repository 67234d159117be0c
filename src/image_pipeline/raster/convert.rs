//! 16-bit to 8-bit sample conversion
//!
//! The down-conversion is exact truncation: each 16-bit sample keeps its
//! high byte and drops the low byte. There is no rounding, no scaling by
//! 255/65535, and no gamma or color-space transformation.

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::RasterBuffer;

/// Channel order of the samples within one stored pixel.
///
/// The raster output is always red, green, blue; sources that store
/// pixels blue-first are reordered here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// Truncating high-byte extraction: `v >> 8`.
#[inline]
pub fn high_byte(sample: u16) -> u8 {
    (sample >> 8) as u8
}

/// Converts one row of interleaved 16-bit samples into row `row` of the
/// raster, emitting red, green, blue regardless of the stored order.
pub fn write_row(
    raster: &mut RasterBuffer,
    row: u32,
    samples: &[u16],
    order: ChannelOrder,
) -> Result<()> {
    let expected = raster.width() as usize * 3;
    if samples.len() < expected {
        return Err(ConversionError::TruncatedData {
            expected: expected * 2,
            actual: samples.len() * 2,
        });
    }

    for (x, pixel) in samples[..expected].chunks_exact(3).enumerate() {
        let (r, g, b) = match order {
            ChannelOrder::Rgb => (pixel[0], pixel[1], pixel[2]),
            ChannelOrder::Bgr => (pixel[2], pixel[1], pixel[0]),
        };
        raster.put_pixel(
            x as u32,
            row,
            [high_byte(r), high_byte(g), high_byte(b)],
        );
    }

    Ok(())
}
