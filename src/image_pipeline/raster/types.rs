//! Output raster buffer types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Owned 8-bit RGB raster, row-major, with an explicit row stride.
///
/// The stride may exceed `width * 3` bytes when rows are padded for
/// alignment, so all addressing goes through `put_pixel`/`row` rather
/// than assuming densely packed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Creates a raster with rows padded to a 4-byte boundary.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_alignment(width, height, 4)
    }

    /// Creates a raster whose row starts are padded up to a multiple of
    /// `alignment` bytes. An alignment of 0 or 1 packs rows densely.
    pub fn with_alignment(width: u32, height: u32, alignment: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        let alignment = alignment.max(1);
        let stride = (width as usize)
            .checked_mul(3)
            .map(|row| row.div_ceil(alignment) * alignment)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        let size = stride
            .checked_mul(height as usize)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;

        Ok(Self {
            width,
            height,
            stride,
            data: vec![0u8; size],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte distance between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Writes one RGB pixel. Panics if `(x, y)` is outside the raster.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = y as usize * self.stride + x as usize * 3;
        self.data[offset..offset + 3].copy_from_slice(&rgb);
    }

    /// Returns the pixel bytes of row `y`, without trailing padding.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * 3]
    }

    /// The full backing buffer, including row padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
