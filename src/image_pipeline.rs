//! Image processing pipeline module
//!
//! This module provides a structured approach to 16-bit raster decoding
//! and down-conversion, with separate modules for the two decode
//! front-ends (binary PPM stream, TIFF container), the shared 8-bit
//! raster conversion, the BMP sink, and conversion orchestration.

pub mod bmp;
pub mod common;
pub mod conversions;
pub mod dcraw;
pub mod ppm;
pub mod raster;
pub mod tiff;

pub use common::{ConversionError, Result};

pub use ppm::{PpmHeader, PpmImage, PpmImageReader, StreamPpmReader};

pub use tiff::{ScanlineSource, TiffContainerInfo, TiffScanlineReader};

pub use raster::{ChannelOrder, RasterBuffer, high_byte, write_row};

pub use bmp::{BitmapWriter, ConversionConfig, ConversionConfigBuilder, StandardBmpWriter};

pub use dcraw::{DcrawProcessSource, RawByteSource};

pub use conversions::{PpmToBmpPipeline, TiffToBmpPipeline};
