use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::types::TiffContainerInfo;

/// Sequential per-row access to a scanline container.
///
/// Rows are handed out strictly top to bottom, one per `read_row` call;
/// there is no random access and no re-reading a row. Samples arrive in
/// the container's stored channel order.
pub trait ScanlineSource {
    fn info(&self) -> &TiffContainerInfo;

    /// Fills `buf` (length `width * samples_per_pixel`) with the next row.
    fn read_row(&mut self, buf: &mut [u16]) -> Result<()>;
}
