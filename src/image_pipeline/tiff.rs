//! TIFF container reading module

mod reader;
mod scanline_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::ScanlineSource;
pub use scanline_reader::TiffScanlineReader;
pub use types::TiffContainerInfo;
