use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::PpmImage;

pub trait PpmImageReader {
    fn read_ppm(&self, source: &mut dyn Read) -> Result<PpmImage>;
}
