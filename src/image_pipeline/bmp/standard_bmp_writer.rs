//! Uncompressed 24-bit BMP encoder.
//!
//! Writes a BITMAPFILEHEADER + BITMAPINFOHEADER (BI_RGB) followed by
//! bottom-up rows of BGR pixels, each row padded to a 4-byte boundary.

use std::io::Write;

use tracing::debug;

use crate::image_pipeline::bmp::writer::BitmapWriter;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterBuffer;

/// BITMAPFILEHEADER (14 bytes) + BITMAPINFOHEADER (40 bytes)
const HEADER_SIZE: usize = 54;

/// 72 DPI in pixels per metre
const RESOLUTION_PPM: i32 = 2835;

pub struct StandardBmpWriter;

impl BitmapWriter for StandardBmpWriter {
    fn write_bitmap(&self, raster: &RasterBuffer, output: &mut dyn Write) -> Result<()> {
        debug!(
            width = raster.width(),
            height = raster.height(),
            "Encoding BMP image"
        );

        let width = raster.width() as usize;
        let height = raster.height() as usize;
        let row_stride = (width * 3).div_ceil(4) * 4;
        let pixel_data_size = row_stride * height;
        let file_size = HEADER_SIZE + pixel_data_size;

        let mut out = Vec::with_capacity(file_size);

        // BITMAPFILEHEADER
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());

        // BITMAPINFOHEADER, positive height means bottom-up rows
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&(raster.width() as i32).to_le_bytes());
        out.extend_from_slice(&(raster.height() as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
        out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        let pad = row_stride - width * 3;
        for y in (0..height).rev() {
            for pixel in raster.row(y as u32).chunks_exact(3) {
                out.push(pixel[2]);
                out.push(pixel[1]);
                out.push(pixel[0]);
            }
            out.extend(std::iter::repeat_n(0u8, pad));
        }

        output.write_all(&out)?;

        debug!("BMP encoding complete");
        Ok(())
    }
}
