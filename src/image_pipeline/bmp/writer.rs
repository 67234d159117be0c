use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterBuffer;

pub trait BitmapWriter {
    fn write_bitmap(&self, raster: &RasterBuffer, output: &mut dyn Write) -> Result<()>;
}
