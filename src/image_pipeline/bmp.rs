//! Bitmap writing module

mod standard_bmp_writer;
pub mod types;
mod writer;


pub use standard_bmp_writer::StandardBmpWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
pub use writer::BitmapWriter;
