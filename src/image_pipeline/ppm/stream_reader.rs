//! PPM reader over a blocking byte stream.
//!
//! Consumes the wire layout produced by a 16-bit linear raw decode
//! (`dcraw -W -4 -c`): binary P6 header followed by big-endian 16-bit
//! RGB samples. The full payload is materialized before conversion
//! starts; there is no incremental decode.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::ppm::header;
use crate::image_pipeline::ppm::reader::PpmImageReader;
use crate::image_pipeline::ppm::types::{PpmHeader, PpmImage};

/// Reader for 16-bit binary PPM streams.
pub struct StreamPpmReader;

impl PpmImageReader for StreamPpmReader {
    fn read_ppm(&self, source: &mut dyn Read) -> Result<PpmImage> {
        let header = header::read_header(source)?;
        let samples = read_samples(source, &header)?;
        Ok(PpmImage { header, samples })
    }
}

/// Reads exactly `width * height * 6` payload bytes and byte-swaps the
/// big-endian samples into native u16 values.
fn read_samples(source: &mut dyn Read, header: &PpmHeader) -> Result<Vec<u16>> {
    let expected = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|pixels| pixels.checked_mul(6))
        .ok_or(ConversionError::InvalidDimensions(
            header.width,
            header.height,
        ))?;

    let mut payload = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        match source.read(&mut payload[filled..]) {
            Ok(0) => {
                return Err(ConversionError::TruncatedData {
                    expected,
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ConversionError::Io(e)),
        }
    }

    debug!(bytes = expected, "Read PPM pixel payload");

    Ok(payload
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect())
}
