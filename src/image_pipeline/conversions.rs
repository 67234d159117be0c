//! Pipeline conversions module
//!
//! This module contains orchestration logic for the two decode
//! front-ends feeding the shared raster conversion and bitmap sink.

mod ppm_to_bmp;
mod tiff_to_bmp;


pub use ppm_to_bmp::PpmToBmpPipeline;
pub use tiff_to_bmp::TiffToBmpPipeline;
