//! Raster conversion module
//!
//! This module owns the strided 8-bit output buffer and the 16-bit to
//! 8-bit sample down-conversion.

pub mod convert;
pub mod types;


pub use convert::{ChannelOrder, high_byte, write_row};
pub use types::RasterBuffer;
