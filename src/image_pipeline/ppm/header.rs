//! Binary PPM header parsing and validation.
//!
//! The header layout is `<2-char tag>\n<width> <height>\n<max_value>\n`,
//! immediately followed by the pixel payload. Only the 16-bit P6 variant
//! is accepted by this pipeline: any syntactically valid "P" + digit tag
//! parses, but tags other than "P6" and maximums other than 65535 are
//! rejected as unsupported rather than malformed.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::ppm::types::PpmHeader;

/// The only magic token this pipeline accepts.
pub const SUPPORTED_TAG: &str = "P6";

/// The only per-channel maximum this pipeline accepts (16-bit samples).
pub const SUPPORTED_MAX_SAMPLE_VALUE: u32 = 65535;

/// Parses and validates a PPM header from a source positioned at offset 0.
///
/// On success the read cursor sits at the first payload byte.
pub fn read_header(source: &mut dyn Read) -> Result<PpmHeader> {
    let format_tag = read_magic(source)?;
    let (width, height) = read_dimensions(source)?;
    let max_sample_value = read_max_sample_value(source)?;

    if format_tag != SUPPORTED_TAG {
        return Err(ConversionError::UnsupportedFormat(format!(
            "PPM format {format_tag} not supported"
        )));
    }

    if max_sample_value != SUPPORTED_MAX_SAMPLE_VALUE {
        return Err(ConversionError::UnsupportedFormat(format!(
            "Channel maximum value {max_sample_value} not supported"
        )));
    }

    debug!(
        tag = %format_tag,
        width,
        height,
        max_sample_value,
        "Parsed PPM header"
    );

    Ok(PpmHeader {
        format_tag,
        width,
        height,
        max_sample_value,
    })
}

/// Reads the two-character magic token and its trailing newline.
fn read_magic(source: &mut dyn Read) -> Result<String> {
    let mut buf = [0u8; 3];
    read_header_bytes(source, &mut buf)?;

    if buf[0] != b'P' || !buf[1].is_ascii_digit() || buf[2] != b'\n' {
        return Err(ConversionError::MalformedHeader(
            "magic number format not recognized".to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&buf[..2]).into_owned())
}

fn read_dimensions(source: &mut dyn Read) -> Result<(u32, u32)> {
    let line = read_line(source)?;
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 2 {
        return Err(ConversionError::FieldParse(
            "dimension format error".to_string(),
        ));
    }

    let width = parts[0]
        .parse()
        .map_err(|_| ConversionError::FieldParse("dimension format error".to_string()))?;
    let height = parts[1]
        .parse()
        .map_err(|_| ConversionError::FieldParse("dimension format error".to_string()))?;

    Ok((width, height))
}

fn read_max_sample_value(source: &mut dyn Read) -> Result<u32> {
    let line = read_line(source)?;
    line.parse().map_err(|_| {
        ConversionError::FieldParse("maximum channel value format error".to_string())
    })
}

/// Reads up to (and consuming) the next newline byte.
fn read_line(source: &mut dyn Read) -> Result<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        read_header_bytes(source, &mut byte)?;
        if byte[0] == b'\n' {
            break;
        }
        line.push(byte[0]);
    }

    String::from_utf8(line)
        .map_err(|_| ConversionError::MalformedHeader("non-ASCII data in header".to_string()))
}

/// `read_exact` with end-of-stream inside the header reported as a
/// malformed header rather than a bare IO error.
fn read_header_bytes(source: &mut dyn Read, buf: &mut [u8]) -> Result<()> {
    source.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            ConversionError::MalformedHeader("unexpected end of header".to_string())
        } else {
            ConversionError::Io(e)
        }
    })
}
