//! Binary PPM reading module (format produced by dcraw's 16-bit output)

pub mod header;
mod reader;
mod stream_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::PpmImageReader;
pub use stream_reader::StreamPpmReader;
pub use types::{PpmHeader, PpmImage};
