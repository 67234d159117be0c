//! Scanline reader backed by the tiff crate.
//!
//! Validates the container directory against the supported subset
//! (contiguous planar layout, 3 samples per pixel, 16 bits per sample)
//! and then hands out rows of stored-order samples one at a time.

use std::io::{Read, Seek};

use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::tiff::reader::ScanlineSource;
use crate::image_pipeline::tiff::types::TiffContainerInfo;

/// TIFF PlanarConfiguration value for interleaved (chunky) layout.
const PLANAR_CONTIGUOUS: u32 = 1;

const SUPPORTED_SAMPLES_PER_PIXEL: u32 = 3;
const SUPPORTED_BITS_PER_SAMPLE: u32 = 16;

#[derive(Debug)]
pub struct TiffScanlineReader {
    info: TiffContainerInfo,
    samples: Vec<u16>,
    next_row: u32,
}

impl TiffScanlineReader {
    /// Opens a tagged-image container and validates its directory.
    ///
    /// The scanline data is decoded up front (the frame is materialized
    /// before conversion); `read_row` then copies rows out sequentially.
    pub fn open<R: Read + Seek>(source: R) -> Result<Self> {
        let mut decoder = Decoder::new(source).map_err(container_error)?;
        let (width, height) = decoder.dimensions().map_err(container_error)?;

        let planar_config = match decoder
            .find_tag(Tag::PlanarConfiguration)
            .map_err(container_error)?
        {
            Some(value) => value.into_u32().map_err(container_error)?,
            None => PLANAR_CONTIGUOUS,
        };
        if planar_config != PLANAR_CONTIGUOUS {
            return Err(ConversionError::UnsupportedFormat(format!(
                "Planar configuration {planar_config} not supported"
            )));
        }

        let samples_per_pixel = match decoder
            .find_tag(Tag::SamplesPerPixel)
            .map_err(container_error)?
        {
            Some(value) => value.into_u32().map_err(container_error)?,
            None => 1,
        };
        if samples_per_pixel != SUPPORTED_SAMPLES_PER_PIXEL {
            return Err(ConversionError::UnsupportedFormat(format!(
                "Sample count {samples_per_pixel} not supported"
            )));
        }

        let bits_per_sample = match decoder
            .find_tag(Tag::BitsPerSample)
            .map_err(container_error)?
        {
            Some(value) => value.into_u32_vec().map_err(container_error)?,
            None => vec![1],
        };
        if bits_per_sample
            .iter()
            .any(|&bits| bits != SUPPORTED_BITS_PER_SAMPLE)
        {
            return Err(ConversionError::UnsupportedFormat(format!(
                "Bit depth {bits_per_sample:?} not supported"
            )));
        }

        let samples = match decoder.read_image().map_err(container_error)? {
            DecodingResult::U16(data) => data,
            _ => {
                return Err(ConversionError::UnsupportedFormat(
                    "Sample representation other than 16-bit unsigned not supported"
                        .to_string(),
                ));
            }
        };

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(SUPPORTED_SAMPLES_PER_PIXEL as usize))
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        if samples.len() < expected {
            return Err(ConversionError::TruncatedData {
                expected: expected * 2,
                actual: samples.len() * 2,
            });
        }

        debug!(width, height, "Decoded TIFF scanline data");

        Ok(Self {
            info: TiffContainerInfo {
                width,
                height,
                samples_per_pixel: samples_per_pixel as u16,
                bits_per_sample: SUPPORTED_BITS_PER_SAMPLE as u16,
            },
            samples,
            next_row: 0,
        })
    }
}

impl ScanlineSource for TiffScanlineReader {
    fn info(&self) -> &TiffContainerInfo {
        &self.info
    }

    fn read_row(&mut self, buf: &mut [u16]) -> Result<()> {
        if self.next_row >= self.info.height {
            return Err(ConversionError::ContainerDecode(format!(
                "scanline {} is past the end of the image",
                self.next_row
            )));
        }

        let row_len = self.info.width as usize * self.info.samples_per_pixel as usize;
        let start = self.next_row as usize * row_len;
        buf.copy_from_slice(&self.samples[start..start + row_len]);
        self.next_row += 1;
        Ok(())
    }
}

fn container_error(e: tiff::TiffError) -> ConversionError {
    ConversionError::ContainerDecode(e.to_string())
}
